//! Playbook loading and validation errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::foundation::{ConversationType, PhaseId, ValidationError};
use crate::domain::trigger::VocabularyError;

/// Errors raised while loading or validating a playbook.
///
/// All of these are startup failures: a playbook that loads successfully is
/// internally consistent for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybookError {
    #[error("Failed to read playbook '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse playbook: {0}")]
    Parse(String),

    #[error("Invalid phase id: {0}")]
    InvalidPhaseId(#[from] ValidationError),

    #[error("Playbook defines no phases")]
    NoPhases,

    #[error("Phase '{0}' is defined more than once")]
    DuplicatePhase(PhaseId),

    #[error("Start phase '{0}' is not defined")]
    UnknownStartPhase(PhaseId),

    #[error("Phase '{phase}' lists unknown successor '{successor}'")]
    UnknownSuccessor { phase: PhaseId, successor: PhaseId },

    #[error("Phase graph contains a cycle through '{0}'")]
    CycleDetected(PhaseId),

    #[error("Gate refers to unknown phase '{0}'")]
    UnknownGatePhase(PhaseId),

    #[error("Gate for ({phase}, {conversation_type}) is defined more than once")]
    DuplicateGate {
        phase: PhaseId,
        conversation_type: ConversationType,
    },

    #[error("Gate for ({phase}, {conversation_type}) both allows and blocks {keys:?}")]
    OverlappingDisclosure {
        phase: PhaseId,
        conversation_type: ConversationType,
        keys: Vec<String>,
    },

    #[error("Invalid trust seed for {conversation_type}: {source}")]
    InvalidSeed {
        conversation_type: ConversationType,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

impl From<serde_yaml::Error> for PlaybookError {
    fn from(err: serde_yaml::Error) -> Self {
        PlaybookError::Parse(err.to_string())
    }
}
