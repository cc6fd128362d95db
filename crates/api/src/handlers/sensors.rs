//! Handlers for the `/sensors` resource (external collaborator boundary).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use wardwatch_core::entity::SafeRange;
use wardwatch_core::error::CoreError;
use wardwatch_core::status::{evaluate, Status};
use wardwatch_core::types::Timestamp;
use wardwatch_db::models::sensor_reading::CreateSensorReading;
use wardwatch_db::repositories::SensorReadingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fixed global safe range for ingested readings, distinct from the
/// per-entity thresholds used by the dashboard simulation.
const INGEST_RANGE: SafeRange = SafeRange { low: 2.0, high: 8.0 };

/// Request body for `POST /sensors/reading`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReadingBody {
    pub sensor_id: String,
    pub ts: Timestamp,
    pub temp_c: f64,
    pub humidity: Option<f64>,
    pub sig: String,
}

/// POST /api/v1/sensors/reading
///
/// Ingest an external sensor submission. The signature must match the one
/// accepted value configured for the deployment; anything else is rejected
/// with 401 before touching storage. Accepted readings are range-checked
/// against the fixed global [2, 8] band and stored with the resulting
/// `alert`/`alertType` flags. No edge detection here — that is a display
/// concern and applies only to the simulated refresh pipeline.
pub async fn record_reading(
    State(state): State<AppState>,
    Json(body): Json<RecordReadingBody>,
) -> AppResult<impl IntoResponse> {
    if body.sig != state.config.sensor_accepted_sig {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid signature".to_string(),
        )));
    }

    let alert = evaluate(body.temp_c, INGEST_RANGE) == Status::Critical;
    let alert_type = alert.then(|| format!("Temperature Out of Range ({}°C)", body.temp_c));

    let reading = SensorReadingRepo::insert(
        &state.pool,
        &CreateSensorReading {
            sensor_id: body.sensor_id,
            recorded_at: body.ts,
            temperature_c: body.temp_c,
            humidity: body.humidity,
            alert,
            alert_type,
        },
    )
    .await?;

    if reading.alert {
        tracing::warn!(
            sensor_id = %reading.sensor_id,
            temperature_c = reading.temperature_c,
            "Ingested reading outside accepted range"
        );
    }

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Reading recorded",
            "reading": reading,
        })),
    ))
}
