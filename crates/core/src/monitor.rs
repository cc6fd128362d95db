//! Polling monitor engine.
//!
//! One engine drives the evaluate → edge-detect pipeline for any list of
//! tracked entities; the room, blood-bank, and organ views all share it
//! instead of reimplementing the refresh loop per entity type.

use std::collections::HashMap;

use serde::Serialize;

use crate::alert::{should_fire, AlertEvent};
use crate::cooling::is_cooling_active;
use crate::entity::TrackedEntity;
use crate::reading::Reading;
use crate::status::{evaluate, Status};

/// Outcome of feeding one reading through the pipeline.
#[derive(Debug)]
pub struct EntityTick {
    pub status: Status,
    pub cooling_active: bool,
    /// Present only on a rising edge into critical.
    pub fired: Option<AlertEvent>,
}

/// Per-entity display state exposed to the API layer.
#[derive(Debug, Clone, Serialize)]
pub struct EntitySnapshot {
    #[serde(flatten)]
    pub entity: TrackedEntity,
    pub latest: Option<Reading>,
    pub status: Option<Status>,
    pub cooling_active: bool,
}

/// Tracks the latest and immediately preceding reading per entity and runs
/// the threshold/alert pipeline over new observations.
#[derive(Debug)]
pub struct MonitorEngine {
    entities: Vec<TrackedEntity>,
    /// entity id -> (latest reading, derived status).
    state: HashMap<String, (Reading, Status)>,
}

impl MonitorEngine {
    pub fn new(entities: Vec<TrackedEntity>) -> Self {
        Self {
            entities,
            state: HashMap::new(),
        }
    }

    pub fn entities(&self) -> &[TrackedEntity] {
        &self.entities
    }

    /// Feed one new reading through the pipeline.
    ///
    /// The previous reading is consulted for edge detection before being
    /// overwritten by the new one. Each entity is independent; observation
    /// order across entities does not matter.
    ///
    /// Returns `None` when the reading names an untracked entity.
    pub fn observe(&mut self, reading: Reading, manual_override: bool) -> Option<EntityTick> {
        let entity = self
            .entities
            .iter()
            .find(|e| e.id == reading.entity_id)?
            .clone();

        let status = evaluate(reading.temperature_c, entity.range);
        let previous = self.state.get(&entity.id).map(|(r, _)| r);
        let fired = should_fire(previous, status, entity.range)
            .then(|| AlertEvent::for_excursion(&entity, &reading));
        let cooling_active = is_cooling_active(status, manual_override);

        self.state.insert(entity.id.clone(), (reading, status));

        Some(EntityTick {
            status,
            cooling_active,
            fired,
        })
    }

    /// Current display state for every tracked entity.
    ///
    /// `cooling_active` is re-derived from the override passed in, so a flip
    /// of the override is reflected immediately without a new reading.
    pub fn snapshot(&self, manual_override: bool) -> Vec<EntitySnapshot> {
        self.entities
            .iter()
            .map(|entity| {
                let latest = self.state.get(&entity.id);
                let status = latest.map(|(_, s)| *s);
                EntitySnapshot {
                    entity: entity.clone(),
                    latest: latest.map(|(r, _)| r.clone()),
                    status,
                    cooling_active: status
                        .is_some_and(|s| is_cooling_active(s, manual_override)),
                }
            })
            .collect()
    }
}
