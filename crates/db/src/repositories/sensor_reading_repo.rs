//! Repository for the `sensor_readings` table (append-only).

use sqlx::PgPool;

use crate::models::sensor_reading::{CreateSensorReading, SensorReading};

/// Column list for `sensor_readings` SELECT queries.
const COLUMNS: &str = "\
    id, sensor_id, recorded_at, temperature_c, humidity, \
    alert, alert_type, created_at";

/// Provides query operations for ingested sensor readings.
pub struct SensorReadingRepo;

impl SensorReadingRepo {
    /// Insert a single reading.
    pub async fn insert(
        pool: &PgPool,
        reading: &CreateSensorReading,
    ) -> Result<SensorReading, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_readings \
             (sensor_id, recorded_at, temperature_c, humidity, alert, alert_type) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(&reading.sensor_id)
            .bind(reading.recorded_at)
            .bind(reading.temperature_c)
            .bind(reading.humidity)
            .bind(reading.alert)
            .bind(&reading.alert_type)
            .fetch_one(pool)
            .await
    }

    /// The most recent reading for a sensor, if any.
    pub async fn latest_for_sensor(
        pool: &PgPool,
        sensor_id: &str,
    ) -> Result<Option<SensorReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_readings \
             WHERE sensor_id = $1 \
             ORDER BY recorded_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(sensor_id)
            .fetch_optional(pool)
            .await
    }

    /// Recent readings across all sensors, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<SensorReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_readings \
             ORDER BY recorded_at DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
