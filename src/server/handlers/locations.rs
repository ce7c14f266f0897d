use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::error::Error;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<String>>, Error> {
    let locations = api.list_locations().await?;

    Ok(locations.into())
}

pub async fn dropoffs(
    Extension(api): Extension<DynAPI>,
    Path(pickup): Path<String>,
) -> Result<Json<Vec<String>>, Error> {
    let dropoffs = api.list_dropoffs(&pickup).await?;

    Ok(dropoffs.into())
}
