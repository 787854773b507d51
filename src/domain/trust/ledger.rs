//! Trust ledger.
//!
//! Turns classified utterances into justified ±1 trust changes. Negative
//! behaviors always win over positive ones in the same utterance, so a pitch
//! padded with a token open question still costs trust.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::Timestamp;
use crate::domain::trigger::{Classification, Polarity, RuleMatch, TriggerClassifier, TriggerSet};

use super::evidence::{EvidenceEntry, EvidenceLog};
use super::level::TrustLevel;

/// Outcome of applying one utterance to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrustDelta {
    /// -1, 0 or +1.
    pub delta: i8,
    /// Reason of the deciding rule; `None` when nothing matched.
    pub reason: Option<String>,
    /// Level after the change.
    pub level: TrustLevel,
    /// True when the scale bound absorbed the change.
    pub saturated: bool,
    /// Every trigger detected in the utterance, including ones that did not
    /// decide the delta.
    pub triggers: TriggerSet,
}

impl TrustDelta {
    pub fn is_change(&self) -> bool {
        self.delta != 0
    }
}

/// Bounded trust score plus its evidence trail.
#[derive(Debug, Clone)]
pub struct TrustLedger {
    classifier: Arc<TriggerClassifier>,
    level: TrustLevel,
    evidence: EvidenceLog,
}

impl TrustLedger {
    /// Creates a ledger starting at `seed`.
    pub fn new(classifier: Arc<TriggerClassifier>, seed: TrustLevel) -> Self {
        Self {
            classifier,
            level: seed,
            evidence: EvidenceLog::new(),
        }
    }

    pub fn level(&self) -> TrustLevel {
        self.level
    }

    pub fn evidence(&self) -> &EvidenceLog {
        &self.evidence
    }

    /// Classifies the utterance and applies the resulting delta.
    pub fn apply_utterance(&mut self, utterance: &str, at: Timestamp) -> TrustDelta {
        let classification = self.classifier.analyze(utterance);
        self.apply(&classification, at)
    }

    /// Applies an already-computed classification.
    pub fn apply(&mut self, classification: &Classification, at: Timestamp) -> TrustDelta {
        let triggers = classification.triggers();

        let Some(decisive) = Self::decisive_match(classification) else {
            return TrustDelta {
                delta: 0,
                reason: None,
                level: self.level,
                saturated: false,
                triggers,
            };
        };

        let delta = decisive.polarity().delta();
        let (level, saturated) = self.level.saturating_apply(delta);
        self.level = level;
        self.evidence.record(EvidenceEntry {
            delta,
            reason: decisive.reason.clone(),
            saturated,
            recorded_at: at,
        });

        debug!(
            delta,
            level = level.value(),
            saturated,
            trigger = %decisive.trigger,
            "Trust adjusted"
        );

        TrustDelta {
            delta,
            reason: Some(decisive.reason.clone()),
            level,
            saturated,
            triggers,
        }
    }

    /// Negative before positive, most specific within the winning family.
    fn decisive_match(classification: &Classification) -> Option<&RuleMatch> {
        classification
            .strongest(Polarity::Negative)
            .or_else(|| classification.strongest(Polarity::Positive))
    }
}
