//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - Real and manually driven clocks
//! - `playbook` - Embedded and file-based playbook sources

pub mod clock;
pub mod playbook;

pub use clock::{ManualClock, MonotonicClock};
pub use playbook::{EmbeddedPlaybookSource, YamlFilePlaybookSource};
