//! Handlers for the `/rooms` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wardwatch_db::models::room::CreateRoom;
use wardwatch_db::repositories::RoomRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/rooms
///
/// List all room records.
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let rooms = RoomRepo::list(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": rooms })))
}

/// POST /api/v1/rooms
///
/// Create a room from `{name, status, floor, type, threshold}`. Validation is
/// shape-only; omitted status/type fall back to the schema defaults.
pub async fn create_room(
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<impl IntoResponse> {
    let room = RoomRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "data": room }))))
}
