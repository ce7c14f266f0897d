mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{bookings, locations, quotes, routes};

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route(
            "/routes",
            get(routes::list)
                .post(routes::create)
                .put(routes::update)
                .delete(routes::remove),
        )
        .route("/locations", get(locations::list))
        .route("/locations/:pickup/dropoffs", get(locations::dropoffs))
        .route("/quotes", post(quotes::create))
        .route("/bookings", post(bookings::create))
        .layer(Extension(api));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
