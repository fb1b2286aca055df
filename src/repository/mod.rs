//! Repository layer: one in-memory registry per entity kind

pub mod books;
pub mod registry;

pub use registry::Registry;

use crate::models::{Administrator, Book, InventoryRecord, Loan, User};

/// Main repository struct holding every registry.
///
/// Built once at startup and handed to the services; clones share storage.
#[derive(Clone, Default)]
pub struct Repository {
    pub administrators: Registry<Administrator>,
    pub users: Registry<User>,
    pub books: Registry<Book>,
    pub inventory: Registry<InventoryRecord>,
    pub loans: Registry<Loan>,
}

impl Repository {
    /// Create a repository with empty registries
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no registry holds any entity
    pub fn is_empty(&self) -> bool {
        self.administrators.is_empty()
            && self.users.is_empty()
            && self.books.is_empty()
            && self.inventory.is_empty()
            && self.loans.is_empty()
    }
}
