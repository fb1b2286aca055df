//! Snapshot endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::snapshot::SnapshotReport, AppState};

/// Write every registry to the data directory
#[utoipa::path(
    post,
    path = "/snapshot",
    tag = "snapshot",
    responses(
        (status = 200, description = "Snapshot written", body = SnapshotReport),
        (status = 503, description = "Snapshot storage unavailable")
    )
)]
pub async fn write_snapshot(State(state): State<AppState>) -> AppResult<Json<SnapshotReport>> {
    let report = state.services.snapshot.flush().await?;
    Ok(Json(report))
}
