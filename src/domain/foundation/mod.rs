//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the rehearsal domain.

mod conversation_type;
mod errors;
mod ids;
mod timestamp;

pub use conversation_type::ConversationType;
pub use errors::ValidationError;
pub use ids::{PhaseId, SessionId};
pub use timestamp::Timestamp;
