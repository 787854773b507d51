//! Session domain module.
//!
//! A training session composes the playbook's phase graph and gates with a
//! trust ledger and the set of behaviors the trainee has shown so far. It is
//! a synchronous state reducer owned by exactly one conversation.

mod errors;
mod snapshot;
mod training_session;

pub use errors::AdvanceError;
pub use snapshot::SessionSnapshot;
pub use training_session::{PhaseTransition, TrainingSession};
