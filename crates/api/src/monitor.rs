//! Shared in-memory monitoring state.
//!
//! Owns the [`MonitorEngine`], the cooling override flag, and a bounded
//! buffer of recently fired alerts. Shared across handlers and the refresh
//! driver via `Arc<MonitorState>`.

use std::collections::VecDeque;
use std::sync::RwLock;

use wardwatch_core::alert::AlertEvent;
use wardwatch_core::cooling::CoolingOverride;
use wardwatch_core::entity::TrackedEntity;
use wardwatch_core::monitor::{EntitySnapshot, MonitorEngine};
use wardwatch_core::reading::Reading;

/// Alerts are ephemeral; keep only the most recent ones for display.
const MAX_BUFFERED_ALERTS: usize = 100;

/// Process-wide monitoring state.
pub struct MonitorState {
    engine: RwLock<MonitorEngine>,
    alerts: RwLock<VecDeque<AlertEvent>>,
    cooling: CoolingOverride,
}

impl MonitorState {
    pub fn new(entities: Vec<TrackedEntity>) -> Self {
        Self {
            engine: RwLock::new(MonitorEngine::new(entities)),
            alerts: RwLock::new(VecDeque::with_capacity(MAX_BUFFERED_ALERTS)),
            cooling: CoolingOverride::new(),
        }
    }

    /// The tracked entity list, cloned for iteration outside the lock.
    pub fn entities(&self) -> Vec<TrackedEntity> {
        let engine = self.engine.read().unwrap_or_else(|e| e.into_inner());
        engine.entities().to_vec()
    }

    /// Feed one reading through the pipeline, buffering any fired alert.
    ///
    /// Returns the fired alert, if the reading crossed into critical.
    pub fn observe(&self, reading: Reading) -> Option<AlertEvent> {
        let manual_override = self.cooling.is_enabled();
        let tick = {
            let mut engine = self.engine.write().unwrap_or_else(|e| e.into_inner());
            engine.observe(reading, manual_override)?
        };

        if let Some(event) = &tick.fired {
            let mut alerts = self.alerts.write().unwrap_or_else(|e| e.into_inner());
            if alerts.len() == MAX_BUFFERED_ALERTS {
                alerts.pop_back();
            }
            alerts.push_front(event.clone());
        }

        tick.fired
    }

    /// Current per-entity display state, cooling re-derived from the live
    /// override value.
    pub fn snapshot(&self) -> Vec<EntitySnapshot> {
        let engine = self.engine.read().unwrap_or_else(|e| e.into_inner());
        engine.snapshot(self.cooling.is_enabled())
    }

    /// Recently fired alerts, newest first.
    pub fn recent_alerts(&self) -> Vec<AlertEvent> {
        let alerts = self.alerts.read().unwrap_or_else(|e| e.into_inner());
        alerts.iter().cloned().collect()
    }

    pub fn cooling_override(&self) -> &CoolingOverride {
        &self.cooling
    }
}
