//! Periodic monitoring refresh driver.
//!
//! On a fixed interval, draws a new reading for every tracked entity from
//! the [`ReadingSource`] and feeds it through the evaluate → edge-detect
//! pipeline. Runs until the cancellation token fires; no tick runs after
//! cancellation.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use wardwatch_core::source::{ReadingSource, SimulatedSource};

use crate::monitor::MonitorState;

/// Run the refresh loop until cancelled.
///
/// Each tick handles every entity independently; a problem with one entity
/// is logged and the rest of the tick continues.
pub async fn run(monitor: Arc<MonitorState>, interval_secs: u64, cancel: CancellationToken) {
    let mut source = SimulatedSource::new();

    tracing::info!(interval_secs, "Monitoring refresh driver started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Monitoring refresh driver stopping");
                break;
            }
            _ = interval.tick() => {
                tick(&monitor, &mut source);
            }
        }
    }
}

/// One refresh pass over all tracked entities.
fn tick(monitor: &MonitorState, source: &mut dyn ReadingSource) {
    let now = Utc::now();

    for entity in monitor.entities() {
        let reading = source.next_reading(&entity, now);
        let temperature_c = reading.temperature_c;

        if let Some(alert) = monitor.observe(reading) {
            tracing::warn!(
                entity_id = %alert.entity_id,
                entity_label = %alert.entity_label,
                observed = alert.observed_value,
                low = alert.safe_range_low,
                high = alert.safe_range_high,
                "Temperature excursion alert fired"
            );
        } else {
            tracing::trace!(entity_id = %entity.id, temperature_c, "Refreshed reading");
        }
    }
}
