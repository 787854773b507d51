//! Progression decisions.

use serde::Serialize;
use std::fmt;

use crate::domain::trigger::BehavioralTrigger;

/// Why a gate refused progression.
///
/// Always recoverable: the trainee can wait out the dwell time or produce
/// the missing behaviors and ask again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateDenial {
    /// The phase has not lasted long enough yet.
    DwellTimeRemaining {
        remaining_seconds: u64,
        minimum_seconds: u64,
    },
    /// Required behaviors not yet shown, every one of them listed.
    MissingTriggers { missing: Vec<BehavioralTrigger> },
}

impl GateDenial {
    /// Seconds still to wait, when dwell time is the blocker.
    pub fn remaining_seconds(&self) -> Option<u64> {
        match self {
            Self::DwellTimeRemaining {
                remaining_seconds, ..
            } => Some(*remaining_seconds),
            Self::MissingTriggers { .. } => None,
        }
    }

    /// Missing triggers, when those are the blocker.
    pub fn missing_triggers(&self) -> &[BehavioralTrigger] {
        match self {
            Self::MissingTriggers { missing } => missing,
            Self::DwellTimeRemaining { .. } => &[],
        }
    }

    /// Coaching text for the trainee.
    pub fn reason(&self) -> String {
        match self {
            Self::DwellTimeRemaining {
                remaining_seconds,
                minimum_seconds,
            } => format!(
                "Stay in this phase {} more second(s) (minimum {}s)",
                remaining_seconds, minimum_seconds
            ),
            Self::MissingTriggers { missing } => {
                let names: Vec<&str> = missing.iter().map(|t| t.as_str()).collect();
                format!("Still missing: {}", names.join(", "))
            }
        }
    }
}

impl fmt::Display for GateDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

/// Outcome of `GateEvaluator::can_progress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "denial", rename_all = "snake_case")]
pub enum ProgressDecision {
    Allowed,
    Denied(GateDenial),
}

impl ProgressDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn denial(&self) -> Option<&GateDenial> {
        match self {
            Self::Allowed => None,
            Self::Denied(denial) => Some(denial),
        }
    }

    /// Converts into a `Result`, denial as the error.
    pub fn into_result(self) -> Result<(), GateDenial> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied(denial) => Err(denial),
        }
    }
}
