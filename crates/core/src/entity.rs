//! Tracked entities and their safe temperature ranges.

use serde::Serialize;

use crate::error::CoreError;

/// What kind of monitored object an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Room,
    Blood,
    Organ,
    Sensor,
}

/// A closed safe temperature interval `[low, high]` in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafeRange {
    pub low: f64,
    pub high: f64,
}

impl SafeRange {
    /// Build a range, rejecting `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self, CoreError> {
        if low >= high {
            return Err(CoreError::Validation(format!(
                "safe range low ({low}) must be below high ({high})"
            )));
        }
        Ok(Self { low, high })
    }

    /// Whether a temperature lies within the closed interval.
    pub fn contains(&self, temperature_c: f64) -> bool {
        temperature_c >= self.low && temperature_c <= self.high
    }
}

/// A monitored object: a room, a blood-type bucket, an organ store, or an
/// external sensor.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedEntity {
    /// Stable identifier, unique across all tracked entities.
    pub id: String,
    /// Human-readable label used in alert notifications.
    pub label: String,
    pub kind: EntityKind,
    pub range: SafeRange,
}

impl TrackedEntity {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: EntityKind,
        range: SafeRange,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            range,
        }
    }
}

/// Blood storage is safe between 2 and 6 °C.
const BLOOD_RANGE: SafeRange = SafeRange { low: 2.0, high: 6.0 };

/// Organ storage shares the blood-bank range.
const ORGAN_RANGE: SafeRange = SafeRange { low: 2.0, high: 6.0 };

/// Lower bound for operation room temperature.
const OPERATION_ROOM_LOW: f64 = 18.0;

/// Default upper bound for operation rooms without an explicit threshold.
pub const DEFAULT_OPERATION_THRESHOLD: f64 = 25.0;

/// The eight blood-type buckets tracked by the blood bank.
pub fn blood_bank_entities() -> Vec<TrackedEntity> {
    ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]
        .into_iter()
        .map(|blood_type| {
            TrackedEntity::new(
                format!("blood-{}", blood_type.to_lowercase()),
                format!("Blood {blood_type}"),
                EntityKind::Blood,
                BLOOD_RANGE,
            )
        })
        .collect()
}

/// The organ storage units on display in the organ room.
pub fn organ_storage_entities() -> Vec<TrackedEntity> {
    [
        ("organ-heart-001", "Heart-001"),
        ("organ-liver-002", "Liver-002"),
        ("organ-kidney-003", "Kidney-003"),
        ("organ-lung-004", "Lung-004"),
        ("organ-kidney-005", "Kidney-005"),
    ]
    .into_iter()
    .map(|(id, label)| TrackedEntity::new(id, label, EntityKind::Organ, ORGAN_RANGE))
    .collect()
}

/// An operation room with the given upper threshold (lower bound is fixed).
pub fn operation_room_entity(id: impl Into<String>, label: impl Into<String>, threshold: f64) -> TrackedEntity {
    TrackedEntity::new(
        id,
        label,
        EntityKind::Room,
        SafeRange {
            low: OPERATION_ROOM_LOW,
            high: threshold,
        },
    )
}

/// The default set of operation rooms.
pub fn operation_room_entities() -> Vec<TrackedEntity> {
    (1..=4)
        .map(|n| {
            operation_room_entity(
                format!("op-room-{n}"),
                format!("Operation Room {n}"),
                DEFAULT_OPERATION_THRESHOLD,
            )
        })
        .collect()
}

/// Every entity tracked by the default monitoring view.
pub fn default_entities() -> Vec<TrackedEntity> {
    let mut entities = blood_bank_entities();
    entities.extend(organ_storage_entities());
    entities.extend(operation_room_entities());
    entities
}
