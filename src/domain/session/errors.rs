//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::PhaseId;
use crate::domain::gating::GateDenial;

/// Why `TrainingSession::advance_to` refused to move.
///
/// Neither variant changes session state. `InvalidTransition` means the
/// request itself is wrong; `GateNotSatisfied` clears once the trainee waits
/// or shows the missing behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvanceError {
    #[error("Cannot move from '{from}' to '{to}': not a successor phase")]
    InvalidTransition { from: PhaseId, to: PhaseId },

    #[error("Gate not satisfied: {0}")]
    GateNotSatisfied(GateDenial),
}

impl AdvanceError {
    /// True when retrying later can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AdvanceError::GateNotSatisfied(_))
    }

    pub fn denial(&self) -> Option<&GateDenial> {
        match self {
            AdvanceError::GateNotSatisfied(denial) => Some(denial),
            AdvanceError::InvalidTransition { .. } => None,
        }
    }
}

impl From<GateDenial> for AdvanceError {
    fn from(denial: GateDenial) -> Self {
        AdvanceError::GateNotSatisfied(denial)
    }
}
