//! Trigger classifier.
//!
//! Maps free-text utterances to behavioral triggers by running every rule
//! of the vocabulary against a normalized copy of the text. Pure and
//! deterministic; empty input yields no triggers.

use super::behavioral_trigger::{BehavioralTrigger, Polarity, TriggerSet};
use super::vocabulary::TriggerVocabulary;

/// A rule that fired on an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub trigger: BehavioralTrigger,
    pub reason: String,
    pub specificity: u8,
}

impl RuleMatch {
    pub fn polarity(&self) -> Polarity {
        self.trigger.polarity()
    }
}

/// Full result of classifying one utterance.
///
/// Keeps every matching rule, in vocabulary order, so the trust ledger can
/// pick the most specific reason for its evidence entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    matches: Vec<RuleMatch>,
}

impl Classification {
    /// Distinct triggers detected.
    pub fn triggers(&self) -> TriggerSet {
        self.matches.iter().map(|m| m.trigger).collect()
    }

    pub fn matches(&self) -> &[RuleMatch] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns true if any rule of the given polarity fired.
    pub fn has(&self, polarity: Polarity) -> bool {
        self.matches.iter().any(|m| m.polarity() == polarity)
    }

    /// The most specific match of a polarity.
    ///
    /// Ties go to the rule declared first in the vocabulary.
    pub fn strongest(&self, polarity: Polarity) -> Option<&RuleMatch> {
        self.matches
            .iter()
            .filter(|m| m.polarity() == polarity)
            .fold(None, |best: Option<&RuleMatch>, candidate| match best {
                Some(current) if current.specificity >= candidate.specificity => Some(current),
                _ => Some(candidate),
            })
    }
}

/// Lower-cases, straightens typographic quotes and collapses whitespace.
pub fn normalize_utterance(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| match c {
                    '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
                    '\u{201C}' | '\u{201D}' => '"',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stateless classifier over a compiled vocabulary.
#[derive(Debug, Clone, Default)]
pub struct TriggerClassifier {
    vocabulary: TriggerVocabulary,
}

impl TriggerClassifier {
    pub fn new(vocabulary: TriggerVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &TriggerVocabulary {
        &self.vocabulary
    }

    /// Returns the distinct triggers present in the utterance.
    pub fn classify(&self, utterance: &str) -> TriggerSet {
        self.analyze(utterance).triggers()
    }

    /// Classifies the utterance and keeps per-rule detail.
    pub fn analyze(&self, utterance: &str) -> Classification {
        let normalized = normalize_utterance(utterance);
        if normalized.is_empty() {
            return Classification::default();
        }
        let word_count = normalized.split(' ').count();

        let matches = self
            .vocabulary
            .rules()
            .iter()
            .filter(|rule| rule.matches(&normalized, word_count))
            .map(|rule| RuleMatch {
                trigger: rule.trigger(),
                reason: rule.reason().to_string(),
                specificity: rule.specificity(),
            })
            .collect();

        Classification { matches }
    }
}
