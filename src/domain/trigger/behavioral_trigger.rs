//! Behavioral triggers - discrete conversational behaviors of the trainee.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Accumulated triggers, ordered by declaration for stable reporting.
pub type TriggerSet = BTreeSet<BehavioralTrigger>;

/// Whether a trigger earns or costs the persona's trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// The trust delta this polarity applies.
    pub fn delta(&self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// A behavior the classifier can detect in a trainee utterance.
///
/// The set is closed: playbooks attach patterns to these tags but cannot
/// invent new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehavioralTrigger {
    SelfIdentifies,
    StatesPurpose,
    DemonstratesSectorFit,
    AsksOpenQuestion,
    DemonstratesExpertise,
    ArticulatesValue,
    Reformulates,
    ProbesDecisionProcess,
    ProposesFollowUp,
    PitchesPrematurely,
    UsesGenericClaims,
    NameDrops,
    LaunchesMonologue,
}

impl BehavioralTrigger {
    /// Every trigger, in declaration order.
    pub const ALL: [BehavioralTrigger; 13] = [
        Self::SelfIdentifies,
        Self::StatesPurpose,
        Self::DemonstratesSectorFit,
        Self::AsksOpenQuestion,
        Self::DemonstratesExpertise,
        Self::ArticulatesValue,
        Self::Reformulates,
        Self::ProbesDecisionProcess,
        Self::ProposesFollowUp,
        Self::PitchesPrematurely,
        Self::UsesGenericClaims,
        Self::NameDrops,
        Self::LaunchesMonologue,
    ];

    /// Returns the kebab-case tag used in playbooks and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfIdentifies => "self-identifies",
            Self::StatesPurpose => "states-purpose",
            Self::DemonstratesSectorFit => "demonstrates-sector-fit",
            Self::AsksOpenQuestion => "asks-open-question",
            Self::DemonstratesExpertise => "demonstrates-expertise",
            Self::ArticulatesValue => "articulates-value",
            Self::Reformulates => "reformulates",
            Self::ProbesDecisionProcess => "probes-decision-process",
            Self::ProposesFollowUp => "proposes-follow-up",
            Self::PitchesPrematurely => "pitches-prematurely",
            Self::UsesGenericClaims => "uses-generic-claims",
            Self::NameDrops => "name-drops",
            Self::LaunchesMonologue => "launches-monologue",
        }
    }

    /// Returns a coaching-friendly description of the behavior.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SelfIdentifies => "Introduce yourself and your company",
            Self::StatesPurpose => "State why you are calling",
            Self::DemonstratesSectorFit => "Show you know their sector",
            Self::AsksOpenQuestion => "Ask an open diagnostic question",
            Self::DemonstratesExpertise => "Share relevant expertise",
            Self::ArticulatesValue => "Articulate the value for them",
            Self::Reformulates => "Reformulate what you heard",
            Self::ProbesDecisionProcess => "Explore the decision process and budget",
            Self::ProposesFollowUp => "Propose a concrete next step",
            Self::PitchesPrematurely => "Pitching before understanding the need",
            Self::UsesGenericClaims => "Unsubstantiated superlative claims",
            Self::NameDrops => "Generic name-dropping",
            Self::LaunchesMonologue => "Long unprompted monologue",
        }
    }

    /// Whether this behavior raises or lowers trust.
    pub fn polarity(&self) -> Polarity {
        match self {
            Self::PitchesPrematurely
            | Self::UsesGenericClaims
            | Self::NameDrops
            | Self::LaunchesMonologue => Polarity::Negative,
            _ => Polarity::Positive,
        }
    }

    /// Returns true if this behavior costs trust.
    pub fn is_negative(&self) -> bool {
        self.polarity() == Polarity::Negative
    }
}

impl fmt::Display for BehavioralTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BehavioralTrigger {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|trigger| trigger.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "behavioral_trigger",
                    format!("unknown trigger '{}'", wanted),
                )
            })
    }
}
