//! Handlers for the `/monitor` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/monitor/status
///
/// Snapshot of every tracked entity: latest reading, derived status, and
/// cooling state. Cooling is re-derived from the live override on every
/// request, never cached.
pub async fn get_status(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let snapshot = state.monitor.snapshot();

    Ok(Json(serde_json::json!({ "data": snapshot })))
}

/// GET /api/v1/monitor/alerts
///
/// Recently fired alert notifications, newest first. The buffer is bounded
/// and in-memory only; there is no durable alert history.
pub async fn list_alerts(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let alerts = state.monitor.recent_alerts();

    Ok(Json(serde_json::json!({ "data": alerts })))
}

/// Request body for `PUT /monitor/cooling-override`.
#[derive(Debug, Deserialize)]
pub struct SetOverrideBody {
    pub enabled: bool,
}

/// GET /api/v1/monitor/cooling-override
pub async fn get_cooling_override(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let enabled = state.monitor.cooling_override().is_enabled();

    Ok(Json(serde_json::json!({ "data": { "enabled": enabled } })))
}

/// PUT /api/v1/monitor/cooling-override
///
/// Flip the process-wide manual override. Takes effect immediately for every
/// subsequent status snapshot.
pub async fn set_cooling_override(
    State(state): State<AppState>,
    Json(body): Json<SetOverrideBody>,
) -> AppResult<Json<serde_json::Value>> {
    let flag = state.monitor.cooling_override();
    if body.enabled {
        flag.enable();
    } else {
        flag.disable();
    }
    tracing::info!(enabled = body.enabled, "Cooling override changed");

    Ok(Json(serde_json::json!({ "data": { "enabled": body.enabled } })))
}
