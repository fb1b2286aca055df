//! Loan (borrow) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Entity;
use crate::error::{AppError, AppResult};

/// Loan as stored in the registry and in snapshots.
///
/// The due date is whatever the caller supplied; no loan period is applied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Loan {
    #[validate(range(min = 1))]
    id: i32,
    #[serde(rename = "libro_id")]
    #[validate(range(min = 1))]
    book_id: i32,
    #[serde(rename = "usuario_id")]
    #[validate(range(min = 1))]
    user_id: i32,
    #[serde(rename = "fecha_reserva")]
    reserved_at: DateTime<Utc>,
    #[serde(rename = "fecha_devolucion")]
    due_at: DateTime<Utc>,
}

impl Entity for Loan {
    const KIND: &'static str = "loan";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Loan {
    pub fn new(
        id: i32,
        book_id: i32,
        user_id: i32,
        reserved_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let loan = Self {
            id,
            book_id,
            user_id,
            reserved_at,
            due_at,
        };
        loan.check()?;
        Ok(loan)
    }

    pub fn book_id(&self) -> i32 {
        self.book_id
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn reserved_at(&self) -> DateTime<Utc> {
        self.reserved_at
    }

    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    pub fn set_due_at(&mut self, due_at: DateTime<Utc>) {
        self.due_at = due_at;
    }
}

/// Create loan request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub id: i32,
    pub libro_id: i32,
    pub usuario_id: i32,
    /// Defaults to the time the request is handled
    pub fecha_reserva: Option<DateTime<Utc>>,
    pub fecha_devolucion: DateTime<Utc>,
}

impl TryFrom<CreateLoan> for Loan {
    type Error = AppError;

    fn try_from(req: CreateLoan) -> AppResult<Self> {
        Loan::new(
            req.id,
            req.libro_id,
            req.usuario_id,
            req.fecha_reserva.unwrap_or_else(Utc::now),
            req.fecha_devolucion,
        )
    }
}
