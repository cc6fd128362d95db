//! Manual cooling override.
//!
//! A single process-wide flag flipped only by operator action. Reads and
//! writes are plain atomic operations; no composite invariant spans other
//! state, so no further locking is needed.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::status::Status;

/// The operator-controlled override gating the simulated cooling actuator.
///
/// Starts enabled. Display surfaces must re-derive cooling state via
/// [`is_cooling_active`] on every render rather than caching it, since
/// flipping the override retroactively changes how existing unsafe readings
/// are interpreted.
#[derive(Debug)]
pub struct CoolingOverride {
    manual_override: AtomicBool,
}

impl Default for CoolingOverride {
    fn default() -> Self {
        Self {
            manual_override: AtomicBool::new(true),
        }
    }
}

impl CoolingOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&self) {
        self.manual_override.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.manual_override.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.manual_override.load(Ordering::Relaxed)
    }
}

/// Whether the simulated cooling actuator is reported active.
///
/// True iff the status is unsafe and the manual override is on. The override
/// never affects the status itself.
pub fn is_cooling_active(status: Status, manual_override: bool) -> bool {
    status != Status::Normal && manual_override
}
