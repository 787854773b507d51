//! Clock Port - Interface for reading the current time.
//!
//! Sessions sample the clock when a phase is entered and again whenever
//! dwell time is queried. No timers are involved.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
///
/// Implementations must never go backwards for the lifetime of a session.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}
