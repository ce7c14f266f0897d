use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::entities::{NewRoute, Route, RoutePatch};
use crate::error::Error;
use crate::store::{insert_route, patch_route, remove_route, RouteRepository};

/// JSON-file-backed route table. Every mutation reads the full
/// snapshot, changes it in memory, and rewrites the whole file. The
/// mutex serializes all operations on the file, reads included: the
/// first-use self-heal writes an empty collection, so an unlocked read
/// racing a mutation could clobber its write or observe a half-written
/// file.
pub struct FileRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Reads the snapshot, initializing the backing file to an empty
    /// collection on first use. Any failure other than the file not
    /// existing propagates.
    async fn read_snapshot(&self) -> Result<Vec<Route>, Error> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if let Some(dir) = self.path.parent() {
                    fs::create_dir_all(dir).await?;
                }
                fs::write(&self.path, b"[]").await?;
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&raw)?)
    }

    async fn write_snapshot(&self, routes: &[Route]) -> Result<(), Error> {
        let raw = serde_json::to_vec_pretty(routes)?;
        fs::write(&self.path, raw).await?;

        Ok(())
    }
}

#[async_trait]
impl RouteRepository for FileRepository {
    async fn list(&self) -> Result<Vec<Route>, Error> {
        let _guard = self.lock.lock().await;

        self.read_snapshot().await
    }

    async fn create(&self, route: NewRoute) -> Result<Route, Error> {
        let _guard = self.lock.lock().await;

        let mut routes = self.read_snapshot().await?;
        let created = insert_route(&mut routes, route);
        self.write_snapshot(&routes).await?;

        Ok(created)
    }

    async fn update(&self, id: u64, patch: RoutePatch) -> Result<Option<Route>, Error> {
        let _guard = self.lock.lock().await;

        let mut routes = self.read_snapshot().await?;
        let updated = patch_route(&mut routes, id, patch);
        if updated.is_some() {
            self.write_snapshot(&routes).await?;
        }

        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<bool, Error> {
        let _guard = self.lock.lock().await;

        let mut routes = self.read_snapshot().await?;
        let removed = remove_route(&mut routes, id);
        if removed {
            self.write_snapshot(&routes).await?;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PricingTier;
    use tempfile::tempdir;

    fn new_route(from: &str, to: &str) -> NewRoute {
        NewRoute {
            from: from.into(),
            to: to.into(),
            distance: "27 km".into(),
            duration: "25 min".into(),
            pricing: vec![
                PricingTier {
                    passengers: "1-2".into(),
                    price: 80.0,
                },
                PricingTier {
                    passengers: "3-4".into(),
                    price: 100.0,
                },
                PricingTier {
                    passengers: "5+".into(),
                    price: 130.0,
                },
            ],
        }
    }

    #[tokio::test]
    async fn missing_file_initializes_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("routes.json");
        let repo = FileRepository::new(&path);

        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(fs::read(&path).await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_round_trips() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::new(dir.path().join("routes.json"));

        let first = repo.create(new_route("Cairns City", "Palm Cove")).await.unwrap();
        let second = repo.create(new_route("Palm Cove", "Cairns City")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![first, second]);
        assert_eq!(listed[0].from, "Cairns City");
        assert_eq!(listed[0].pricing.len(), 3);
    }

    #[tokio::test]
    async fn id_sequence_after_deleting_below_the_maximum() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::new(dir.path().join("routes.json"));

        repo.create(new_route("A", "B")).await.unwrap();
        repo.create(new_route("B", "C")).await.unwrap();
        assert!(repo.delete(1).await.unwrap());

        let third = repo.create(new_route("C", "D")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::new(dir.path().join("routes.json"));
        repo.create(new_route("A", "B")).await.unwrap();

        let patch = RoutePatch {
            duration: Some("30 min".into()),
            ..Default::default()
        };
        let updated = repo.update(1, patch).await.unwrap().unwrap();
        assert_eq!(updated.duration, "30 min");
        assert_eq!(updated.from, "A");

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].duration, "30 min");
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_a_no_op() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        let repo = FileRepository::new(&path);
        repo.create(new_route("A", "B")).await.unwrap();
        let before = fs::read(&path).await.unwrap();

        let patch = RoutePatch {
            from: Some("Z".into()),
            ..Default::default()
        };
        assert!(repo.update(42, patch).await.unwrap().is_none());
        assert_eq!(fs::read(&path).await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        let repo = FileRepository::new(&path);
        repo.create(new_route("A", "B")).await.unwrap();
        let before = fs::read(&path).await.unwrap();

        assert!(!repo.delete(42).await.unwrap());
        assert_eq!(fs::read(&path).await.unwrap(), before);
    }

    #[tokio::test]
    async fn list_racing_creates_does_not_lose_writes() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::new(dir.path().join("routes.json"));

        // On a fresh store, a list self-heals the missing file by
        // writing an empty collection. Interleave it with creates; the
        // lock must keep that write from clobbering a persisted route.
        let (first, _, second) = tokio::join!(
            repo.create(new_route("A", "B")),
            repo.list(),
            repo.create(new_route("B", "C")),
        );
        first.unwrap();
        second.unwrap();

        let listed = repo.list().await.unwrap();
        let mut ids: Vec<u64> = listed.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_not_a_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        fs::write(&path, b"not json").await.unwrap();

        let repo = FileRepository::new(&path);
        assert!(repo.list().await.is_err());
        assert_eq!(fs::read(&path).await.unwrap(), b"not json");
    }
}
