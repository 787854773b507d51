//! Conversation type - how the simulated meeting came about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The kind of conversation a session simulates.
///
/// Chosen once when the session is created. It selects which gates apply and
/// the trust level the persona starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationType {
    /// Unsolicited outreach; the persona starts out untrusting.
    #[default]
    #[serde(alias = "coldCall", alias = "cold_call", alias = "COLD")]
    ColdCall,

    /// A meeting the persona agreed to in advance.
    #[serde(alias = "scheduledMeeting", alias = "scheduled_meeting", alias = "MEETING")]
    ScheduledMeeting,
}

impl ConversationType {
    /// All conversation types, in declaration order.
    pub const ALL: [ConversationType; 2] = [Self::ColdCall, Self::ScheduledMeeting];

    /// Returns the canonical kebab-case key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ColdCall => "cold-call",
            Self::ScheduledMeeting => "scheduled-meeting",
        }
    }

    /// Returns a label suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ColdCall => "Cold call",
            Self::ScheduledMeeting => "Scheduled meeting",
        }
    }
}

impl fmt::Display for ConversationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationType {
    type Err = ValidationError;

    /// Accepts the canonical keys plus the legacy spellings found in older
    /// scenario tables.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cold-call" | "coldCall" | "cold_call" | "COLD" | "cold" => Ok(Self::ColdCall),
            "scheduled-meeting" | "scheduledMeeting" | "scheduled_meeting" | "MEETING"
            | "meeting" => Ok(Self::ScheduledMeeting),
            other => Err(ValidationError::invalid_format(
                "conversation_type",
                format!("unknown conversation type '{}'", other),
            )),
        }
    }
}
