//! Data models for the eLibrary catalog

pub mod administrator;
pub mod book;
pub mod inventory;
pub mod loan;
pub mod role;
pub mod user;

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use administrator::{Administrator, AdministratorShort, CreateAdministrator};
pub use book::{Book, CreateBook};
pub use inventory::{CreateInventoryRecord, InventoryRecord};
pub use loan::{CreateLoan, Loan};
pub use role::{Permissions, Role};
pub use user::{CreateUser, User, UserShort};

/// A catalog entity that can be admitted to a registry.
///
/// Validation rules live on the struct as `validator` attributes; `check`
/// collapses any failure into one message per entity family.
pub trait Entity: Validate + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity family name, used in messages and logs
    const KIND: &'static str;

    fn id(&self) -> i32;

    fn check(&self) -> AppResult<()> {
        self.validate().map_err(|_| invalid::<Self>())
    }
}

/// The single validation failure of an entity family
pub(crate) fn invalid<T: Entity>() -> AppError {
    AppError::Validation(format!("invalid {} data", T::KIND))
}

/// Setter guard for required text fields
pub(crate) fn required<T: Entity>(value: impl Into<String>) -> AppResult<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(invalid::<T>());
    }
    Ok(value)
}
