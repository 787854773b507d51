//! Monotonic clock adapter.

use std::time::Instant;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads wall-clock time once, then advances by `Instant` deltas.
///
/// A system clock adjustment mid-session cannot shrink dwell time.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Timestamp,
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Timestamp::now(),
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        self.origin.plus(self.anchor.elapsed())
    }
}
