//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /    -> list_rooms
/// POST   /    -> create_room
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(rooms::list_rooms).post(rooms::create_room))
}
