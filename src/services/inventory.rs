//! Inventory service

use crate::{
    error::{AppError, AppResult},
    models::inventory::{CreateInventoryRecord, InventoryRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register an inventory record. The referenced book is not looked up.
    pub fn register(&self, request: CreateInventoryRecord) -> AppResult<InventoryRecord> {
        let record = self
            .repository
            .inventory
            .admit(InventoryRecord::try_from(request)?)?;
        tracing::info!(
            "Inventory: registered book id={} available={}",
            record.book_id(),
            record.is_available()
        );
        Ok(record)
    }

    pub fn list(&self) -> Vec<InventoryRecord> {
        self.repository.inventory.export()
    }

    pub fn get(&self, id: i32) -> AppResult<InventoryRecord> {
        self.repository.inventory.find_by_id(id)
    }

    /// Inventory records held for a book id
    pub fn availability(&self, book_id: i32) -> AppResult<Vec<InventoryRecord>> {
        let records = self
            .repository
            .inventory
            .filter(|record| record.book_id() == book_id);
        if records.is_empty() {
            return Err(AppError::NotFound(format!(
                "No inventory record for book {}",
                book_id
            )));
        }
        Ok(records)
    }
}
