//! Serialized playbook format.
//!
//! These types mirror the YAML document one-to-one. They carry no
//! invariants; `Playbook::from_definition` validates them into lookup
//! tables.

use serde::Deserialize;

use crate::domain::foundation::{ConversationType, PhaseId};
use crate::domain::trigger::{BehavioralTrigger, TriggerRuleDefinition};

use super::phase::SalesPhase;

/// Root of a playbook document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybookDefinition {
    /// Defaults to `opening` when omitted.
    #[serde(default)]
    pub start_phase: Option<PhaseId>,

    #[serde(default)]
    pub trust_seeds: TrustSeedsDefinition,

    pub phases: Vec<SalesPhase>,

    #[serde(default)]
    pub gates: Vec<GateDefinition>,

    #[serde(default)]
    pub triggers: Vec<TriggerRuleDefinition>,
}

/// Initial trust per conversation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustSeedsDefinition {
    #[serde(rename = "cold-call", alias = "coldCall", alias = "cold_call", default)]
    pub cold_call: u8,

    #[serde(
        rename = "scheduled-meeting",
        alias = "scheduledMeeting",
        alias = "scheduled_meeting",
        default = "default_scheduled_meeting_seed"
    )]
    pub scheduled_meeting: u8,
}

fn default_scheduled_meeting_seed() -> u8 {
    2
}

impl Default for TrustSeedsDefinition {
    fn default() -> Self {
        Self {
            cold_call: 0,
            scheduled_meeting: default_scheduled_meeting_seed(),
        }
    }
}

/// One gate entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateDefinition {
    pub phase: PhaseId,
    pub conversation_type: ConversationType,
    #[serde(default)]
    pub allowed: Vec<String>,
    #[serde(default)]
    pub blocked: Vec<String>,
    #[serde(default)]
    pub minimum_dwell_seconds: u64,
    #[serde(default)]
    pub required_triggers: Vec<BehavioralTrigger>,
}
