use std::sync::Mutex;

use async_trait::async_trait;

use crate::entities::{NewRoute, Route, RoutePatch};
use crate::error::{unexpected_error, Error};
use crate::store::{insert_route, patch_route, remove_route, RouteRepository};

/// In-memory route table with the same CRUD and id-allocation semantics
/// as the file-backed repository. Test substitute.
#[derive(Default)]
pub struct MemoryRepository {
    routes: Mutex<Vec<Route>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            routes: Mutex::new(routes),
        }
    }
}

#[async_trait]
impl RouteRepository for MemoryRepository {
    async fn list(&self) -> Result<Vec<Route>, Error> {
        let routes = self.routes.lock().map_err(|_| unexpected_error())?;

        Ok(routes.clone())
    }

    async fn create(&self, route: NewRoute) -> Result<Route, Error> {
        let mut routes = self.routes.lock().map_err(|_| unexpected_error())?;

        Ok(insert_route(&mut routes, route))
    }

    async fn update(&self, id: u64, patch: RoutePatch) -> Result<Option<Route>, Error> {
        let mut routes = self.routes.lock().map_err(|_| unexpected_error())?;

        Ok(patch_route(&mut routes, id, patch))
    }

    async fn delete(&self, id: u64) -> Result<bool, Error> {
        let mut routes = self.routes.lock().map_err(|_| unexpected_error())?;

        Ok(remove_route(&mut routes, id))
    }
}
