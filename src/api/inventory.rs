//! Inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::JsonBody,
    error::AppResult,
    models::inventory::{CreateInventoryRecord, InventoryRecord},
    AppState,
};

/// List inventory records
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses(
        (status = 200, description = "List of inventory records", body = Vec<InventoryRecord>)
    )
)]
pub async fn list_inventory(State(state): State<AppState>) -> Json<Vec<InventoryRecord>> {
    Json(state.services.inventory.list())
}

/// Get an inventory record by ID
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = i32, Path, description = "Inventory record ID")
    ),
    responses(
        (status = 200, description = "Inventory record", body = InventoryRecord),
        (status = 404, description = "Inventory record not found")
    )
)]
pub async fn get_inventory_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InventoryRecord>> {
    let record = state.services.inventory.get(id)?;
    Ok(Json(record))
}

/// Register an inventory record
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    request_body = CreateInventoryRecord,
    responses(
        (status = 201, description = "Inventory record created", body = InventoryRecord),
        (status = 400, description = "Invalid inventory data")
    )
)]
pub async fn create_inventory_record(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<CreateInventoryRecord>,
) -> AppResult<(StatusCode, Json<InventoryRecord>)> {
    let created = state.services.inventory.register(record)?;
    Ok((StatusCode::CREATED, Json(created)))
}
