//! Repository for the `rooms` table.

use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room};

/// Column list for `rooms` SELECT queries.
const COLUMNS: &str = "id, name, status, floor, room_type, threshold, created_at, updated_at";

/// Provides query operations for hospital rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// List all rooms, newest floor layout first by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY id");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Insert a room, applying the schema defaults for omitted fields.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (name, status, floor, room_type, threshold) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.name)
            .bind(input.status.as_deref().unwrap_or("Available"))
            .bind(input.floor)
            .bind(input.room_type.as_deref().unwrap_or("normal"))
            .bind(input.threshold)
            .fetch_one(pool)
            .await
    }
}
