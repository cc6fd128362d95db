//! Ingested sensor reading models.

use serde::Serialize;
use sqlx::FromRow;
use wardwatch_core::types::{DbId, Timestamp};

/// A stored sensor reading, including the range-check outcome computed at
/// ingestion time.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub id: DbId,
    pub sensor_id: String,
    pub recorded_at: Timestamp,
    pub temperature_c: f64,
    pub humidity: Option<f64>,
    /// Whether the temperature fell outside the global accepted range.
    pub alert: bool,
    pub alert_type: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a reading after signature and range checks.
#[derive(Debug, Clone)]
pub struct CreateSensorReading {
    pub sensor_id: String,
    pub recorded_at: Timestamp,
    pub temperature_c: f64,
    pub humidity: Option<f64>,
    pub alert: bool,
    pub alert_type: Option<String>,
}
