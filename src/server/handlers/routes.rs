use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{NewRoute, Route, RoutePatch};
use crate::error::{not_found_error, Error};

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    id: u64,
    #[serde(flatten)]
    patch: RoutePatch,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteParams {
    id: u64,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteResult {
    deleted: bool,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Route>>, Error> {
    let routes = api.list_routes().await?;

    Ok(routes.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<NewRoute>,
) -> Result<Json<Route>, Error> {
    let route = api.create_route(params).await?;

    Ok(route.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<Route>, Error> {
    let route = api
        .update_route(params.id, params.patch)
        .await?
        .ok_or_else(not_found_error)?;

    Ok(route.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<DeleteParams>,
) -> Result<Json<DeleteResult>, Error> {
    let deleted = api.delete_route(params.id).await?;

    Ok(Json(DeleteResult { deleted }))
}
