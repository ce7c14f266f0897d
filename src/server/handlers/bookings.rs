use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{BookingConfirmation, BookingRequest};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(booking): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, Error> {
    let confirmation = api.submit_booking(booking).await?;

    Ok(confirmation.into())
}
