pub mod health;
pub mod monitor;
pub mod rooms;
pub mod sensors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rooms                            list (GET), create (POST)
///
/// /sensors/reading                  ingest an external reading (POST)
///
/// /monitor/status                   per-entity snapshot (GET)
/// /monitor/alerts                   recently fired alerts (GET)
/// /monitor/cooling-override         read (GET), set (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rooms", rooms::router())
        .nest("/sensors", sensors::router())
        .nest("/monitor", monitor::router())
}
