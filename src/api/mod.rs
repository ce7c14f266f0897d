use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{BookingConfirmation, BookingRequest, NewRoute, Quote, Route, RoutePatch};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn list_routes(&self) -> Result<Vec<Route>, Error>;
    async fn create_route(&self, route: NewRoute) -> Result<Route, Error>;
    async fn update_route(&self, id: u64, patch: RoutePatch) -> Result<Option<Route>, Error>;
    async fn delete_route(&self, id: u64) -> Result<bool, Error>;
}

#[async_trait]
pub trait FareAPI {
    async fn create_quote(
        &self,
        pickup: &str,
        dropoff: &str,
        passengers: u32,
        child_seat: bool,
    ) -> Result<Quote, Error>;

    async fn list_locations(&self) -> Result<Vec<String>, Error>;

    async fn list_dropoffs(&self, pickup: &str) -> Result<Vec<String>, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn submit_booking(&self, booking: BookingRequest) -> Result<BookingConfirmation, Error>;
}

pub trait API: RouteAPI + FareAPI + BookingAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
