use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::server::AppState;

/// Health check endpoint handler.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/health`
/// - **Response**: `{"status":"ok"}`
///
/// Performs a round-trip against the database pool, so a 200 here means the
/// service can actually serve requests, not just that the process is up.
/// Suitable for load balancer health checks and liveness/readiness probes.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.db.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}
