//! Route definitions for the `/sensors` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::sensors;
use crate::state::AppState;

/// Routes mounted at `/sensors`.
///
/// ```text
/// POST   /reading    -> record_reading
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reading", post(sensors::record_reading))
}
