//! Loan endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::JsonBody,
    error::AppResult,
    models::loan::{CreateLoan, Loan},
    AppState,
};

/// List loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "List of loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> Json<Vec<Loan>> {
    Json(state.services.loans.list_loans())
}

/// Get a loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get_loan(id)?;
    Ok(Json(loan))
}

/// Create a loan (borrow a book)
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 400, description = "Invalid loan data")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    JsonBody(loan): JsonBody<CreateLoan>,
) -> AppResult<(StatusCode, Json<Loan>)> {
    let created = state.services.loans.create_loan(loan)?;
    Ok((StatusCode::CREATED, Json(created)))
}
