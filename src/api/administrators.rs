//! Administrator account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::JsonBody,
    error::AppResult,
    models::{
        administrator::{AdministratorShort, CreateAdministrator},
        role::Permissions,
    },
    AppState,
};

/// List administrators
#[utoipa::path(
    get,
    path = "/administrators",
    tag = "administrators",
    responses(
        (status = 200, description = "List of administrators", body = Vec<AdministratorShort>)
    )
)]
pub async fn list_administrators(State(state): State<AppState>) -> Json<Vec<AdministratorShort>> {
    let admins = state.services.users.list_administrators();
    Json(admins.iter().map(AdministratorShort::from).collect())
}

/// Get administrator details by ID
#[utoipa::path(
    get,
    path = "/administrators/{id}",
    tag = "administrators",
    params(
        ("id" = i32, Path, description = "Administrator ID")
    ),
    responses(
        (status = 200, description = "Administrator details", body = AdministratorShort),
        (status = 404, description = "Administrator not found")
    )
)]
pub async fn get_administrator(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AdministratorShort>> {
    let admin = state.services.users.get_administrator(id)?;
    Ok(Json(AdministratorShort::from(&admin)))
}

/// Create a new administrator
#[utoipa::path(
    post,
    path = "/administrators",
    tag = "administrators",
    request_body = CreateAdministrator,
    responses(
        (status = 201, description = "Administrator created", body = AdministratorShort),
        (status = 400, description = "Invalid administrator data")
    )
)]
pub async fn create_administrator(
    State(state): State<AppState>,
    JsonBody(admin): JsonBody<CreateAdministrator>,
) -> AppResult<(StatusCode, Json<AdministratorShort>)> {
    let created = state.services.users.create_administrator(admin)?;
    Ok((StatusCode::CREATED, Json(AdministratorShort::from(&created))))
}

/// Permissions granted by an administrator's role
#[utoipa::path(
    get,
    path = "/administrators/{id}/permissions",
    tag = "administrators",
    params(
        ("id" = i32, Path, description = "Administrator ID")
    ),
    responses(
        (status = 200, description = "Resolved permissions", body = Permissions),
        (status = 400, description = "Stored role tag is not a known role"),
        (status = 404, description = "Administrator not found")
    )
)]
pub async fn get_administrator_permissions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Permissions>> {
    let permissions = state.services.users.administrator_permissions(id)?;
    Ok(Json(permissions))
}
