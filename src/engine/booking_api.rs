use super::Engine;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::BookingAPI;
use crate::entities::{BookingConfirmation, BookingRequest};
use crate::error::{validation_error, Error};
use crate::notify;

const BOOKING_ID_PREFIX: &str = "BK";

fn base36_upper(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if value == 0 {
        return "0".into();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }

    digits.iter().rev().collect()
}

/// Booking ids are the submission time in milliseconds, base-36
/// encoded, behind a fixed tag.
pub(crate) fn booking_id(timestamp_millis: u64) -> String {
    format!("{}{}", BOOKING_ID_PREFIX, base36_upper(timestamp_millis))
}

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self, booking))]
    async fn submit_booking(&self, booking: BookingRequest) -> Result<BookingConfirmation, Error> {
        if booking.full_name.is_empty()
            || booking.email.is_empty()
            || booking.contact_number.is_empty()
        {
            return Err(validation_error());
        }

        notify::send_customer_confirmation(&booking);
        notify::send_operator_notification(&booking);

        let id = booking_id(Utc::now().timestamp_millis() as u64);

        tracing::info!(booking_id = %id, "booking confirmed");

        Ok(BookingConfirmation {
            success: true,
            message: "Booking confirmed".into(),
            booking_id: id,
        })
    }
}
