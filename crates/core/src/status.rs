//! Threshold evaluation.
//!
//! Pure logic — no database access. The caller fetches readings and ranges
//! and passes them in.

use serde::Serialize;

use crate::entity::SafeRange;

/// Width of the warning band just inside each critical boundary, in °C.
const WARNING_MARGIN: f64 = 1.0;

/// Derived status tier for a reading. Never stored; recomputed on every
/// evaluation from the latest reading and the entity's current range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warning,
    Critical,
}

/// Classify a temperature against a safe range.
///
/// - `Critical` when the temperature is strictly outside `[low, high]`.
/// - `Warning` when within one degree of either boundary (inside the range).
/// - `Normal` otherwise.
///
/// Total over all finite inputs; the same relative band applies to every
/// entity kind.
pub fn evaluate(temperature_c: f64, range: SafeRange) -> Status {
    if temperature_c > range.high || temperature_c < range.low {
        Status::Critical
    } else if temperature_c > range.high - WARNING_MARGIN
        || temperature_c < range.low + WARNING_MARGIN
    {
        Status::Warning
    } else {
        Status::Normal
    }
}
