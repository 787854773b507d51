//! Clock Adapters
//!
//! - **MonotonicClock** - Wall-clock timestamps that never go backwards
//! - **ManualClock** - Explicitly advanced clock (testing, scripted replays)

mod manual;
mod monotonic;

pub use manual::ManualClock;
pub use monotonic::MonotonicClock;
