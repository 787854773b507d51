//! Ports - Interfaces for external dependencies.
//!
//! The engine is synchronous and pure; the only things it needs from the
//! outside world are the current time and the playbook it runs on.
//!
//! - `Clock` - Source of wall-clock timestamps for dwell time
//! - `PlaybookSource` - Where the validated playbook comes from

mod clock;
mod playbook_source;

pub use clock::Clock;
pub use playbook_source::PlaybookSource;
