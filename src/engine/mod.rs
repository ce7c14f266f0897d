mod booking_api;
mod fare_api;
mod route_api;

use crate::api::API;
use crate::store::DynRouteRepository;

/// Implements the service APIs over an injected route repository. The
/// engine holds no state of its own; every operation works on the
/// repository's current snapshot.
pub struct Engine {
    repo: DynRouteRepository,
}

impl Engine {
    pub fn new(repo: DynRouteRepository) -> Self {
        Self { repo }
    }
}

impl API for Engine {}
