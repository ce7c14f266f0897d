use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::Quote;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    pickup: String,
    dropoff: String,
    passengers: u32,
    #[serde(default)]
    child_seat: bool,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Quote>, Error> {
    let quote = api
        .create_quote(
            &params.pickup,
            &params.dropoff,
            params.passengers,
            params.child_seat,
        )
        .await?;

    Ok(quote.into())
}
