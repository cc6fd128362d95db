//! Room directory models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardwatch_core::types::{DbId, Timestamp};

/// A hospital room record.
///
/// `status` is one of Available / Occupied / Booked / Maintenance and
/// `room_type` is normal / operation; both are stored as plain text, matching
/// the shape-only validation the room API specifies.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub floor: Option<i32>,
    #[serde(rename = "type")]
    pub room_type: String,
    /// Upper safe-temperature bound; meaningful only when `room_type` is
    /// `operation`.
    pub threshold: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub status: Option<String>,
    pub floor: Option<i32>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub threshold: Option<f64>,
}
