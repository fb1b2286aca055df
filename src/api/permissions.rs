//! Role permission lookup

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::role::Permissions, AppState};

/// Resolve the permissions of a role tag
#[utoipa::path(
    get,
    path = "/permissions/{role}",
    tag = "permissions",
    params(
        ("role" = String, Path, description = "Role tag: Administrador or Usuario")
    ),
    responses(
        (status = 200, description = "Resolved permissions", body = Permissions),
        (status = 400, description = "Unknown role")
    )
)]
pub async fn resolve_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> AppResult<Json<Permissions>> {
    let permissions = state.services.users.resolve_role(&role)?;
    Ok(Json(permissions))
}
