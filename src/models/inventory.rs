//! Inventory record model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Entity;
use crate::error::{AppError, AppResult};

/// Availability flag for one book.
///
/// `book_id` is only required to be positive; it is not resolved against the
/// book registry, and nothing prevents several records for the same book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct InventoryRecord {
    #[validate(range(min = 1))]
    id: i32,
    #[serde(rename = "libro_id")]
    #[validate(range(min = 1))]
    book_id: i32,
    #[serde(rename = "disponible")]
    available: bool,
}

impl Entity for InventoryRecord {
    const KIND: &'static str = "inventory";

    fn id(&self) -> i32 {
        self.id
    }
}

impl InventoryRecord {
    pub fn new(id: i32, book_id: i32, available: bool) -> AppResult<Self> {
        let record = Self {
            id,
            book_id,
            available,
        };
        record.check()?;
        Ok(record)
    }

    pub fn book_id(&self) -> i32 {
        self.book_id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

/// Create inventory record request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInventoryRecord {
    pub id: i32,
    pub libro_id: i32,
    #[serde(default = "default_available")]
    pub disponible: bool,
}

fn default_available() -> bool {
    true
}

impl TryFrom<CreateInventoryRecord> for InventoryRecord {
    type Error = AppError;

    fn try_from(req: CreateInventoryRecord) -> AppResult<Self> {
        InventoryRecord::new(req.id, req.libro_id, req.disponible)
    }
}
