use serde::{Deserialize, Serialize};

/// A booking submission as received from the booking form. Never
/// persisted: validated, handed to the notification stubs, discarded.
///
/// Wire names are camelCase to match the public booking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub pickup_location: String,
    pub pickup_address: String,
    pub dropoff_location: String,
    pub dropoff_address: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub passengers: u32,
    pub luggage: u32,
    #[serde(default)]
    pub flight_number: String,
    pub child_seat: bool,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub total_price: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
    pub booking_id: String,
}
