//! Pluggable reading sources.
//!
//! The evaluator/detector pipeline is identical whether readings come from
//! the built-in simulation or from the external sensor endpoint; only the
//! source differs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entity::{EntityKind, TrackedEntity};
use crate::reading::Reading;
use crate::types::Timestamp;

/// Produces the next reading for a tracked entity.
pub trait ReadingSource: Send {
    fn next_reading(&mut self, entity: &TrackedEntity, now: Timestamp) -> Reading;
}

/// Cold-storage simulation band (blood, organs, sensors), in °C.
///
/// Uniform draw over [1, 11): wide enough to cross the [2, 6] storage
/// ranges in both directions.
const COLD_STORAGE_BAND: (f64, f64) = (1.0, 11.0);

/// Room simulation band, in °C: 22 ± 6, so readings cross in and out of
/// the [18, threshold] operating range.
const ROOM_BAND: (f64, f64) = (16.0, 28.0);

/// Draws uniform random temperatures from a per-kind band, rounded to one
/// decimal place the way the dashboard displays them.
#[derive(Debug)]
pub struct SimulatedSource {
    rng: StdRng,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The simulation band for an entity.
    ///
    /// Rooms sit around ambient temperature; everything else lives in cold
    /// storage. Each band straddles its kind's safe range so simulated
    /// entities drift in and out of it.
    fn band(entity: &TrackedEntity) -> (f64, f64) {
        match entity.kind {
            EntityKind::Room => ROOM_BAND,
            EntityKind::Blood | EntityKind::Organ | EntityKind::Sensor => COLD_STORAGE_BAND,
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for SimulatedSource {
    fn next_reading(&mut self, entity: &TrackedEntity, now: Timestamp) -> Reading {
        let (low, high) = Self::band(entity);
        let raw: f64 = self.rng.random_range(low..high);
        let temperature_c = (raw * 10.0).round() / 10.0;
        let humidity = (self.rng.random_range(30.0..60.0_f64) * 10.0).round() / 10.0;
        Reading::new(entity.id.clone(), now, temperature_c).with_humidity(humidity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::should_fire;
    use crate::entity::{operation_room_entity, SafeRange, TrackedEntity};
    use crate::status::{evaluate, Status};
    use chrono::Utc;

    fn blood_entity() -> TrackedEntity {
        TrackedEntity::new(
            "blood-a+",
            "Blood A+",
            EntityKind::Blood,
            SafeRange { low: 2.0, high: 6.0 },
        )
    }

    #[test]
    fn cold_storage_readings_stay_within_band() {
        let mut source = SimulatedSource::seeded(42);
        let entity = blood_entity();
        for _ in 0..200 {
            let reading = source.next_reading(&entity, Utc::now());
            assert!(reading.temperature_c >= 1.0 && reading.temperature_c <= 11.0);
            assert_eq!(reading.entity_id, "blood-a+");
            assert!(reading.humidity.is_some());
        }
    }

    #[test]
    fn room_readings_use_the_ambient_band() {
        let mut source = SimulatedSource::seeded(42);
        let entity = operation_room_entity("op-room-1", "Operation Room 1", 25.0);
        for _ in 0..200 {
            let reading = source.next_reading(&entity, Utc::now());
            assert!(
                reading.temperature_c >= 16.0 && reading.temperature_c <= 28.0,
                "t = {}",
                reading.temperature_c
            );
        }
    }

    #[test]
    fn operation_rooms_cross_their_safe_range_and_can_alert() {
        let mut source = SimulatedSource::seeded(1);
        let entity = operation_room_entity("op-room-1", "Operation Room 1", 25.0);

        let mut saw_safe = false;
        let mut saw_critical = false;
        let mut fired = false;
        let mut previous: Option<Reading> = None;

        for _ in 0..500 {
            let reading = source.next_reading(&entity, Utc::now());
            let status = evaluate(reading.temperature_c, entity.range);
            saw_safe |= status != Status::Critical;
            saw_critical |= status == Status::Critical;
            fired |= should_fire(previous.as_ref(), status, entity.range);
            previous = Some(reading);
        }

        assert!(saw_safe, "simulated room should enter its safe range");
        assert!(saw_critical, "simulated room should leave its safe range");
        assert!(fired, "room excursions should fire at least one alert");
    }

    #[test]
    fn temperatures_are_rounded_to_one_decimal() {
        let mut source = SimulatedSource::seeded(7);
        let reading = source.next_reading(&blood_entity(), Utc::now());
        let scaled = reading.temperature_c * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}
