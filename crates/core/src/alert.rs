//! Edge-triggered alert notifications for unsafe temperature excursions.

use serde::Serialize;

use crate::entity::{SafeRange, TrackedEntity};
use crate::reading::Reading;
use crate::status::Status;
use crate::types::Timestamp;

/// A notification describing one entity's transition into an unsafe status.
///
/// Ephemeral — delivered to a display surface, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    pub entity_id: String,
    pub entity_label: String,
    pub observed_value: f64,
    pub safe_range_low: f64,
    pub safe_range_high: f64,
    pub fired_at: Timestamp,
}

impl AlertEvent {
    /// Build the event for an excursion observed in `reading`.
    pub fn for_excursion(entity: &TrackedEntity, reading: &Reading) -> Self {
        Self {
            entity_id: entity.id.clone(),
            entity_label: entity.label.clone(),
            observed_value: reading.temperature_c,
            safe_range_low: entity.range.low,
            safe_range_high: entity.range.high,
            fired_at: reading.recorded_at,
        }
    }
}

/// Decide whether a new notification should fire for an entity.
///
/// Fires only on a rising edge: the previous reading sat within the closed
/// safe interval and the new status is [`Status::Critical`]. An entity that
/// stays critical across refresh cycles notifies exactly once, at the moment
/// it crosses; the detector re-arms when a reading returns to the interval.
///
/// Entry into [`Status::Warning`] alone never fires — only the critical
/// boundary is notification-worthy. The first reading for an entity (no
/// previous value) never fires either.
pub fn should_fire(previous: Option<&Reading>, new_status: Status, range: SafeRange) -> bool {
    match previous {
        Some(prev) => range.contains(prev.temperature_c) && new_status == Status::Critical,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::evaluate;
    use chrono::Utc;

    const RANGE: SafeRange = SafeRange { low: 2.0, high: 6.0 };

    fn reading(t: f64) -> Reading {
        Reading::new("blood-a+", Utc::now(), t)
    }

    /// Run a temperature sequence through evaluate + should_fire and collect
    /// the per-step fired flags.
    fn fired_flags(temps: &[f64]) -> Vec<bool> {
        let mut previous: Option<Reading> = None;
        let mut flags = Vec::with_capacity(temps.len());
        for &t in temps {
            let new = reading(t);
            let status = evaluate(t, RANGE);
            flags.push(should_fire(previous.as_ref(), status, RANGE));
            previous = Some(new);
        }
        flags
    }

    #[test]
    fn fires_once_across_sustained_excursion() {
        // normal -> warning -> critical -> critical -> critical
        let flags = fired_flags(&[4.0, 5.5, 7.0, 8.0, 9.0]);
        assert_eq!(flags, vec![false, false, true, false, false]);
    }

    #[test]
    fn rearms_after_return_to_safe_interval() {
        let flags = fired_flags(&[4.0, 7.0, 4.0, 7.0]);
        assert_eq!(flags, vec![false, true, false, true]);
    }

    #[test]
    fn warning_entry_never_fires() {
        let flags = fired_flags(&[4.0, 5.5, 4.0, 2.5]);
        assert_eq!(flags, vec![false, false, false, false]);
    }

    #[test]
    fn first_reading_never_fires_even_when_critical() {
        let flags = fired_flags(&[9.0]);
        assert_eq!(flags, vec![false]);
    }

    #[test]
    fn previous_at_exact_boundary_still_arms_the_detector() {
        // 6.0 is inside the closed interval, so the jump to 7.0 fires.
        let flags = fired_flags(&[6.0, 7.0]);
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn excursion_event_copies_entity_fields() {
        let entity = TrackedEntity::new(
            "blood-a+",
            "Blood A+",
            crate::entity::EntityKind::Blood,
            RANGE,
        );
        let r = reading(9.0);
        let event = AlertEvent::for_excursion(&entity, &r);
        assert_eq!(event.entity_id, "blood-a+");
        assert_eq!(event.entity_label, "Blood A+");
        assert_eq!(event.observed_value, 9.0);
        assert_eq!(event.safe_range_low, 2.0);
        assert_eq!(event.safe_range_high, 6.0);
    }
}
