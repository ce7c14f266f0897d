//! Notification stubs for the booking intake. Real delivery would hand
//! these bodies to a mail provider; for now they only log.

use crate::entities::BookingRequest;

pub fn send_customer_confirmation(booking: &BookingRequest) {
    let body = format!(
        "Dear {name},\n\n\
         Thank you for booking with us!\n\n\
         Pickup: {pickup} ({pickup_address})\n\
         Dropoff: {dropoff} ({dropoff_address})\n\
         Date & Time: {date} at {time}\n\
         Passengers: {passengers}, Luggage: {luggage}\n\
         {flight}\
         Child Seat: {child_seat}\n\n\
         Total Fare: ${total}",
        name = booking.full_name,
        pickup = booking.pickup_location,
        pickup_address = booking.pickup_address,
        dropoff = booking.dropoff_location,
        dropoff_address = booking.dropoff_address,
        date = booking.pickup_date,
        time = booking.pickup_time,
        passengers = booking.passengers,
        luggage = booking.luggage,
        flight = if booking.flight_number.is_empty() {
            String::new()
        } else {
            format!("Flight: {}\n", booking.flight_number)
        },
        child_seat = if booking.child_seat { "Yes" } else { "No" },
        total = booking.total_price,
    );

    tracing::info!(to = %booking.email, body = %body, "customer confirmation email");
}

pub fn send_operator_notification(booking: &BookingRequest) {
    let body = format!(
        "New booking received.\n\n\
         Customer: {name} ({email}, {phone})\n\
         Pickup: {pickup} ({pickup_address})\n\
         Dropoff: {dropoff} ({dropoff_address})\n\
         Date & Time: {date} at {time}\n\
         Passengers: {passengers}, Luggage: {luggage}\n\
         Child Seat: {child_seat}\n\n\
         Total Fare: ${total}",
        name = booking.full_name,
        email = booking.email,
        phone = booking.contact_number,
        pickup = booking.pickup_location,
        pickup_address = booking.pickup_address,
        dropoff = booking.dropoff_location,
        dropoff_address = booking.dropoff_address,
        date = booking.pickup_date,
        time = booking.pickup_time,
        passengers = booking.passengers,
        luggage = booking.luggage,
        child_seat = if booking.child_seat { "Yes" } else { "No" },
        total = booking.total_price,
    );

    tracing::info!(body = %body, "operator notification email");
}
