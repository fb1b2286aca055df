//! Error types for the eLibrary server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes carried in error response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NoSuchData = 3,
    InvalidRole = 4,
    PersistenceFailure = 5,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A payload was rejected by an entity validator
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A role tag that is neither "Administrador" nor "Usuario"
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// A snapshot could not be read or written
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// HTTP status and error code this error is rendered with
    pub fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::InvalidRole(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidRole),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            AppError::PersistenceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::PersistenceFailure)
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::InvalidRole(msg) => msg,
            AppError::PersistenceUnavailable(msg) => {
                tracing::error!("Persistence error: {}", msg);
                "Snapshot storage unavailable".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
