//! Route definitions for the `/monitor` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::monitor;
use crate::state::AppState;

/// Routes mounted at `/monitor`.
///
/// ```text
/// GET    /status              -> get_status
/// GET    /alerts              -> list_alerts
/// GET    /cooling-override    -> get_cooling_override
/// PUT    /cooling-override    -> set_cooling_override
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(monitor::get_status))
        .route("/alerts", get(monitor::list_alerts))
        .route(
            "/cooling-override",
            get(monitor::get_cooling_override).put(monitor::set_cooling_override),
        )
}
