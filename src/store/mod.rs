mod file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{NewRoute, Route, RoutePatch};
use crate::error::Error;

pub use file::FileRepository;
pub use memory::MemoryRepository;

/// Storage abstraction for the route table. The file-backed
/// implementation is the production one; the in-memory implementation
/// exists so the engine can be exercised without touching disk.
#[async_trait]
pub trait RouteRepository {
    async fn list(&self) -> Result<Vec<Route>, Error>;
    async fn create(&self, route: NewRoute) -> Result<Route, Error>;
    async fn update(&self, id: u64, patch: RoutePatch) -> Result<Option<Route>, Error>;
    async fn delete(&self, id: u64) -> Result<bool, Error>;
}

pub type DynRouteRepository = Arc<dyn RouteRepository + Send + Sync>;

/// Next id is max of the current snapshot plus one, recomputed on every
/// create. An id freed by deleting the current maximum is handed out
/// again; this matches the observable id sequences of the original
/// admin API.
pub(crate) fn next_route_id(routes: &[Route]) -> u64 {
    routes.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

pub(crate) fn insert_route(routes: &mut Vec<Route>, route: NewRoute) -> Route {
    let created = route.into_route(next_route_id(routes));
    routes.push(created.clone());
    created
}

pub(crate) fn patch_route(routes: &mut [Route], id: u64, patch: RoutePatch) -> Option<Route> {
    let route = routes.iter_mut().find(|r| r.id == id)?;
    patch.apply(route);
    Some(route.clone())
}

pub(crate) fn remove_route(routes: &mut Vec<Route>, id: u64) -> bool {
    let before = routes.len();
    routes.retain(|r| r.id != id);
    routes.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_route(from: &str, to: &str) -> NewRoute {
        NewRoute {
            from: from.into(),
            to: to.into(),
            distance: "10 km".into(),
            duration: "15 min".into(),
            pricing: vec![],
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_route_id(&[]), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let mut routes = Vec::new();
        insert_route(&mut routes, new_route("A", "B"));
        insert_route(&mut routes, new_route("B", "A"));
        assert_eq!(next_route_id(&routes), 3);

        // A gap below the maximum does not change the allocation.
        assert!(remove_route(&mut routes, 1));
        assert_eq!(next_route_id(&routes), 3);
    }

    #[test]
    fn deleting_the_maximum_frees_its_id() {
        let mut routes = Vec::new();
        insert_route(&mut routes, new_route("A", "B"));
        insert_route(&mut routes, new_route("B", "A"));

        assert!(remove_route(&mut routes, 2));
        let created = insert_route(&mut routes, new_route("A", "C"));
        assert_eq!(created.id, 2);
    }

    #[test]
    fn remove_reports_whether_anything_matched() {
        let mut routes = Vec::new();
        insert_route(&mut routes, new_route("A", "B"));

        assert!(!remove_route(&mut routes, 99));
        assert_eq!(routes.len(), 1);
        assert!(remove_route(&mut routes, 1));
        assert!(routes.is_empty());
    }
}
