use super::Engine;

use async_trait::async_trait;

use crate::api::RouteAPI;
use crate::entities::{NewRoute, Route, RoutePatch};
use crate::error::Error;

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_routes(&self) -> Result<Vec<Route>, Error> {
        self.repo.list().await
    }

    #[tracing::instrument(skip(self))]
    async fn create_route(&self, route: NewRoute) -> Result<Route, Error> {
        let created = self.repo.create(route).await?;

        tracing::info!(id = created.id, "route created");

        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    async fn update_route(&self, id: u64, patch: RoutePatch) -> Result<Option<Route>, Error> {
        self.repo.update(id, patch).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_route(&self, id: u64) -> Result<bool, Error> {
        self.repo.delete(id).await
    }
}
