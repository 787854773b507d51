//! Immutable session snapshot.
//!
//! Consumers that used to be pushed state changes pull a snapshot after each
//! call instead.

use serde::Serialize;

use crate::domain::foundation::{ConversationType, PhaseId, SessionId, Timestamp};
use crate::domain::trigger::TriggerSet;
use crate::domain::trust::{EvidenceEntry, PersonaStance, TrustLevel};

/// Point-in-time view of a training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub conversation_type: ConversationType,
    pub phase: PhaseId,
    pub phase_title: String,
    pub trust_level: TrustLevel,
    pub stance: PersonaStance,
    pub phase_entered_at: Timestamp,
    pub dwell_seconds: u64,
    /// Oldest first.
    pub evidence: Vec<EvidenceEntry>,
    pub triggers: TriggerSet,
    pub next_phases: Vec<PhaseId>,
    pub is_complete: bool,
    pub taken_at: Timestamp,
}

impl SessionSnapshot {
    /// Evidence rendered as `"+1: reason"` lines.
    pub fn evidence_lines(&self) -> Vec<String> {
        self.evidence.iter().map(ToString::to_string).collect()
    }

    /// Pretty-printed JSON, for UI layers polling after each call.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
