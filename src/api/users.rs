//! User account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::JsonBody,
    error::AppResult,
    models::{
        loan::Loan,
        role::Permissions,
        user::{CreateUser, UserShort},
    },
    AppState,
};

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserShort>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserShort>> {
    let users = state.services.users.list_users();
    Json(users.iter().map(UserShort::from).collect())
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserShort),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserShort>> {
    let user = state.services.users.get_user(id)?;
    Ok(Json(UserShort::from(&user)))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserShort),
        (status = 400, description = "Invalid user data")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<UserShort>)> {
    let created = state.services.users.create_user(user)?;
    Ok((StatusCode::CREATED, Json(UserShort::from(&created))))
}

/// Permissions granted by a user's role
#[utoipa::path(
    get,
    path = "/users/{id}/permissions",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Resolved permissions", body = Permissions),
        (status = 400, description = "Stored role tag is not a known role"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_permissions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Permissions>> {
    let permissions = state.services.users.user_permissions(id)?;
    Ok(Json(permissions))
}

/// Loans recorded for a user
#[utoipa::path(
    get,
    path = "/users/{id}/loans",
    tag = "users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Loans of the user, possibly empty", body = Vec<Loan>)
    )
)]
pub async fn get_user_loans(State(state): State<AppState>, Path(id): Path<i32>) -> Json<Vec<Loan>> {
    Json(state.services.loans.get_user_loans(id))
}
