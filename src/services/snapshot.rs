//! JSON snapshot persistence for the registries
//!
//! Each entity kind lives in its own file under the data directory, as a
//! pretty-printed array. Snapshots are read once at startup and written on
//! request or at shutdown; there is no incremental persistence.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use chrono::Utc;

use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Entity,
    repository::{Registry, Repository},
};

use super::defaults;

pub const ADMINISTRATORS_FILE: &str = "administradores.json";
pub const USERS_FILE: &str = "usuarios.json";
pub const BOOKS_FILE: &str = "libros.json";
pub const INVENTORY_FILE: &str = "inventario.json";
pub const LOANS_FILE: &str = "prestamos.json";

/// Reads and writes snapshot files in one directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load a snapshot. A missing file is an empty collection.
    pub async fn load<T: DeserializeOwned>(&self, file: &str) -> AppResult<Vec<T>> {
        let path = self.data_dir.join(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(unavailable(&path, e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| unavailable(&path, e))
    }

    /// Write a snapshot, replacing the previous file only once the new one
    /// is fully written.
    pub async fn save<T: Serialize>(&self, file: &str, entities: &[T]) -> AppResult<()> {
        let path = self.data_dir.join(file);
        let tmp = self.data_dir.join(format!("{}.tmp", file));

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| unavailable(&self.data_dir, e))?;
        let json = serde_json::to_vec_pretty(entities).map_err(|e| unavailable(&path, e))?;
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| unavailable(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| unavailable(&path, e))
    }

    /// Move a snapshot that failed to restore out of the way, so later
    /// flushes cannot overwrite it. Returns the new path.
    pub async fn quarantine(&self, file: &str) -> AppResult<PathBuf> {
        let path = self.data_dir.join(file);
        let aside = self.data_dir.join(format!(
            "{}.corrupt-{}",
            file,
            Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
        ));
        tokio::fs::rename(&path, &aside)
            .await
            .map_err(|e| unavailable(&path, e))?;
        Ok(aside)
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::PersistenceUnavailable(format!("{}: {}", path.display(), err))
}

/// Entity counts per registry after a restore or flush
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SnapshotReport {
    pub administradores: usize,
    pub usuarios: usize,
    pub libros: usize,
    pub inventario: usize,
    pub prestamos: usize,
}

#[derive(Clone)]
pub struct SnapshotService {
    repository: Repository,
    store: SnapshotStore,
    /// Files whose restore failed since startup
    failed: Arc<Mutex<BTreeSet<&'static str>>>,
    /// Failed files that are still in place and must not be overwritten
    held: Arc<Mutex<BTreeSet<&'static str>>>,
}

impl SnapshotService {
    pub fn new(repository: Repository, store: SnapshotStore) -> Self {
        Self {
            repository,
            store,
            failed: Arc::default(),
            held: Arc::default(),
        }
    }

    /// Whether any snapshot failed to restore
    pub fn restore_failed(&self) -> bool {
        !self.failed.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }

    fn is_held(&self, file: &str) -> bool {
        self.held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(file)
    }

    /// Seed every registry from its snapshot.
    ///
    /// A snapshot that cannot be read, parsed or validated leaves its registry
    /// empty; the failure is logged and the other registries still load.
    /// The rejected file is renamed to `<file>.corrupt-<timestamp>`. If it
    /// cannot be moved, flushes skip that file.
    pub async fn restore(&self) -> SnapshotReport {
        let repo = &self.repository;
        SnapshotReport {
            administradores: self.restore_one(&repo.administrators, ADMINISTRATORS_FILE).await,
            usuarios: self.restore_one(&repo.users, USERS_FILE).await,
            libros: self.restore_one(&repo.books, BOOKS_FILE).await,
            inventario: self.restore_one(&repo.inventory, INVENTORY_FILE).await,
            prestamos: self.restore_one(&repo.loans, LOANS_FILE).await,
        }
    }

    async fn restore_one<T: Entity>(&self, registry: &Registry<T>, file: &'static str) -> usize {
        let loaded = match self.store.load::<T>(file).await {
            Ok(entities) => registry.seed(entities),
            Err(e) => Err(e),
        };
        match loaded {
            Ok(count) => {
                tracing::info!("Restored {} {} entries from {}", count, T::KIND, file);
                count
            }
            Err(e) => {
                tracing::warn!("Starting with empty {} registry: {}", T::KIND, e);
                self.set_aside(file).await;
                0
            }
        }
    }

    async fn set_aside(&self, file: &'static str) {
        self.failed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(file);
        match self.store.quarantine(file).await {
            Ok(aside) => tracing::warn!("Moved rejected snapshot to {}", aside.display()),
            Err(e) => {
                tracing::warn!("Keeping {} untouched, it will not be flushed: {}", file, e);
                self.held
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(file);
            }
        }
    }

    /// Write every registry to its snapshot file
    pub async fn flush(&self) -> AppResult<SnapshotReport> {
        let repo = &self.repository;
        let report = SnapshotReport {
            administradores: self.flush_one(&repo.administrators, ADMINISTRATORS_FILE).await?,
            usuarios: self.flush_one(&repo.users, USERS_FILE).await?,
            libros: self.flush_one(&repo.books, BOOKS_FILE).await?,
            inventario: self.flush_one(&repo.inventory, INVENTORY_FILE).await?,
            prestamos: self.flush_one(&repo.loans, LOANS_FILE).await?,
        };
        tracing::info!("Snapshot written to {}", self.store.data_dir().display());
        Ok(report)
    }

    async fn flush_one<T: Entity>(&self, registry: &Registry<T>, file: &str) -> AppResult<usize> {
        let entities = registry.export();
        if self.is_held(file) {
            tracing::warn!("Not flushing {}: its previous contents were never restored", file);
            return Ok(entities.len());
        }
        self.store.save(file, &entities).await?;
        Ok(entities.len())
    }

    /// Admit the default catalog when nothing was restored and no snapshot
    /// was rejected. Returns whether the defaults were loaded.
    pub fn seed_defaults_if_empty(&self) -> AppResult<bool> {
        if !self.repository.is_empty() {
            return Ok(false);
        }
        if self.restore_failed() {
            tracing::warn!("Default catalog skipped: some snapshots failed to restore");
            return Ok(false);
        }
        defaults::load(&self.repository)?;
        tracing::info!("Loaded default catalog");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    fn service(dir: &Path) -> (Repository, SnapshotService) {
        let repository = Repository::new();
        let service = SnapshotService::new(repository.clone(), SnapshotStore::new(dir));
        (repository, service)
    }

    #[tokio::test]
    async fn test_missing_snapshots_restore_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (repository, snapshots) = service(dir.path());
        assert_eq!(snapshots.restore().await, SnapshotReport::default());
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn test_flush_then_restore() {
        let dir = tempfile::tempdir().unwrap();
        let (repository, snapshots) = service(dir.path());
        assert!(snapshots.seed_defaults_if_empty().unwrap());
        let written = snapshots.flush().await.unwrap();
        assert_eq!(written.libros, 5);
        assert!(dir.path().join(BOOKS_FILE).exists());
        assert!(!dir.path().join(format!("{}.tmp", BOOKS_FILE)).exists());

        let (restored_repo, restored) = service(dir.path());
        assert_eq!(restored.restore().await, written);
        assert_eq!(restored_repo.books.export(), repository.books.export());
        assert_eq!(restored_repo.loans.export(), repository.loans.export());
        assert_eq!(
            restored_repo.administrators.export(),
            repository.administrators.export()
        );
    }

    #[tokio::test]
    async fn test_malformed_snapshot_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(BOOKS_FILE), b"{ not json").unwrap();
        std::fs::write(
            dir.path().join(INVENTORY_FILE),
            br#"[{"id":1,"libro_id":1,"disponible":true}]"#,
        )
        .unwrap();

        let (repository, snapshots) = service(dir.path());
        let report = snapshots.restore().await;
        assert_eq!(report.libros, 0);
        assert_eq!(report.inventario, 1);
        assert!(repository.books.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_entity_rejects_whole_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(BOOKS_FILE),
            r#"[{"id":1,"titulo":"Meditaciones","autor":"Marco Aurelio"},
                {"id":0,"titulo":"","autor":""}]"#,
        )
        .unwrap();

        let (repository, snapshots) = service(dir.path());
        assert_eq!(snapshots.restore().await.libros, 0);
        assert!(repository.books.is_empty());
    }

    fn quarantined(dir: &Path, file: &str) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&format!("{}.corrupt-", file)))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_rejected_snapshot_survives_flush() {
        let dir = tempfile::tempdir().unwrap();
        let mut books: Vec<String> = (1..=50)
            .map(|id| format!(r#"{{"id":{},"titulo":"Libro {}","autor":"Autor"}}"#, id, id))
            .collect();
        books.push(r#"{"id":51,"titulo":"X","autor":""}"#.to_string());
        let original = format!("[{}]", books.join(","));
        std::fs::write(dir.path().join(BOOKS_FILE), &original).unwrap();

        let (repository, snapshots) = service(dir.path());
        assert_eq!(snapshots.restore().await.libros, 0);
        assert!(snapshots.restore_failed());
        snapshots.flush().await.unwrap();

        let aside = quarantined(dir.path(), BOOKS_FILE);
        assert_eq!(aside.len(), 1);
        assert_eq!(std::fs::read_to_string(&aside[0]).unwrap(), original);
        assert!(repository.books.is_empty());
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (_, snapshots) = service(dir.path());
        snapshots.restore().await;
        assert!(!snapshots.restore_failed());
        assert!(quarantined(dir.path(), BOOKS_FILE).is_empty());
    }

    #[tokio::test]
    async fn test_held_snapshot_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LOANS_FILE), b"[{\"id\":1}]").unwrap();

        let (_, snapshots) = service(dir.path());
        snapshots.held.lock().unwrap().insert(LOANS_FILE);
        let report = snapshots.flush().await.unwrap();
        assert_eq!(report.prestamos, 0);
        assert_eq!(
            std::fs::read(dir.path().join(LOANS_FILE)).unwrap(),
            b"[{\"id\":1}]"
        );
        assert!(dir.path().join(BOOKS_FILE).exists());
    }

    #[tokio::test]
    async fn test_defaults_skipped_after_failed_restore() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(USERS_FILE), b"{ not json").unwrap();

        let (repository, snapshots) = service(dir.path());
        snapshots.restore().await;
        assert!(!snapshots.seed_defaults_if_empty().unwrap());
        assert!(repository.is_empty());
        assert_eq!(quarantined(dir.path(), USERS_FILE).len(), 1);
    }

    #[tokio::test]
    async fn test_load_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where a file is expected cannot be read as one
        std::fs::create_dir(dir.path().join(LOANS_FILE)).unwrap();
        let store = SnapshotStore::new(dir.path());
        let result = store.load::<Book>(LOANS_FILE).await;
        assert!(matches!(result, Err(AppError::PersistenceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_defaults_skipped_when_data_restored() {
        let dir = tempfile::tempdir().unwrap();
        let (repository, snapshots) = service(dir.path());
        repository
            .books
            .admit(Book::new(9, "Meditaciones", "Marco Aurelio", "", "", "").unwrap())
            .unwrap();
        assert!(!snapshots.seed_defaults_if_empty().unwrap());
        assert_eq!(repository.books.len(), 1);
    }
}
