//! Business logic services

pub mod catalog;
pub mod defaults;
pub mod inventory;
pub mod loans;
pub mod snapshot;
pub mod users;

use crate::repository::Repository;

pub use snapshot::SnapshotStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub inventory: inventory::InventoryService,
    pub loans: loans::LoansService,
    pub snapshot: snapshot::SnapshotService,
}

impl Services {
    /// Create all services over one shared repository
    pub fn new(repository: Repository, store: SnapshotStore) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            inventory: inventory::InventoryService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            snapshot: snapshot::SnapshotService::new(repository, store),
        }
    }
}
