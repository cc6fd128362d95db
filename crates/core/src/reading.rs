//! Environmental readings.

use serde::Serialize;

use crate::types::Timestamp;

/// A single timestamped observation for one tracked entity.
///
/// Immutable once created; a newer reading for the same entity supersedes it.
/// Only the latest and the immediately preceding reading are ever needed.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub entity_id: String,
    pub recorded_at: Timestamp,
    pub temperature_c: f64,
    pub humidity: Option<f64>,
}

impl Reading {
    pub fn new(entity_id: impl Into<String>, recorded_at: Timestamp, temperature_c: f64) -> Self {
        Self {
            entity_id: entity_id.into(),
            recorded_at,
            temperature_c,
            humidity: None,
        }
    }

    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }
}
