//! Trust level value object.
//!
//! The persona's trust is an integer on a closed 0..=5 scale. Arithmetic on
//! it saturates at the bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Bounded trust score of the simulated persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TrustLevel(u8);

impl TrustLevel {
    pub const MIN: TrustLevel = TrustLevel(0);
    pub const MAX: TrustLevel = TrustLevel(5);

    /// Creates a trust level, rejecting values above the scale.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "trust_level",
                i64::from(Self::MIN.0),
                i64::from(Self::MAX.0),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Applies a signed delta, clamping to the scale.
    ///
    /// Returns the new level and whether the bound cut the delta short.
    pub fn saturating_apply(&self, delta: i8) -> (TrustLevel, bool) {
        let target = i16::from(self.0) + i16::from(delta);
        let clamped = target.clamp(i16::from(Self::MIN.0), i16::from(Self::MAX.0));
        // clamped is within 0..=5
        (TrustLevel(clamped as u8), clamped != target)
    }

    /// The tone the persona adopts at this level.
    pub fn stance(&self) -> PersonaStance {
        match self.0 {
            0 | 1 => PersonaStance::Guarded,
            2 => PersonaStance::Cautious,
            3 | 4 => PersonaStance::Receptive,
            _ => PersonaStance::Open,
        }
    }
}

impl Default for TrustLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for TrustLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrustLevel> for u8 {
    fn from(level: TrustLevel) -> Self {
        level.0
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

/// Tone and verbosity register the persona should use.
///
/// The persona prompt builder reads this instead of interpreting raw
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaStance {
    /// Short answers, no volunteered information, looking for an exit.
    Guarded,
    /// Polite but reserved; answers what is asked and nothing more.
    Cautious,
    /// Engaged; elaborates and shares context when asked.
    Receptive,
    /// Collaborative; volunteers detail and signals buying intent.
    Open,
}

impl PersonaStance {
    /// Instruction text for the persona in this stance.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Guarded => "Answer in a few words. Volunteer nothing. Look for a reason to end the call.",
            Self::Cautious => "Stay polite but reserved. Answer only what is asked, without elaboration.",
            Self::Receptive => "Engage with the questions. Share context and examples when asked.",
            Self::Open => "Collaborate openly. Volunteer relevant detail and discuss next steps.",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Guarded => "Guarded",
            Self::Cautious => "Cautious",
            Self::Receptive => "Receptive",
            Self::Open => "Open",
        }
    }
}
