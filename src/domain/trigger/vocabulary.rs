//! Trigger vocabulary - the declarative `{trigger, patterns}` table.
//!
//! Rules are loaded as data from the playbook and compiled once. Control
//! flow in the classifier never mentions a specific trigger.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use thiserror::Error;

use super::behavioral_trigger::{BehavioralTrigger, Polarity};

/// Errors raised while compiling a vocabulary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VocabularyError {
    #[error("Trigger '{trigger}' has invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        trigger: BehavioralTrigger,
        pattern: String,
        message: String,
    },

    #[error("Trigger '{trigger}' rule has neither patterns nor a word threshold")]
    EmptyRule { trigger: BehavioralTrigger },

    #[error("Trigger '{trigger}' rule has an empty reason")]
    MissingReason { trigger: BehavioralTrigger },
}

/// One rule as written in a playbook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TriggerRuleDefinition {
    pub trigger: BehavioralTrigger,

    /// Evidence text recorded when this rule decides a trust change.
    pub reason: String,

    /// Higher is more specific; the most specific matching rule supplies
    /// the evidence reason.
    #[serde(default = "default_specificity")]
    pub specificity: u8,

    #[serde(default)]
    pub patterns: Vec<String>,

    /// Fires on any utterance with at least this many words.
    #[serde(default)]
    pub min_words: Option<usize>,
}

fn default_specificity() -> u8 {
    1
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct TriggerRule {
    trigger: BehavioralTrigger,
    reason: String,
    specificity: u8,
    patterns: Vec<Regex>,
    min_words: Option<usize>,
}

impl TriggerRule {
    /// Compiles a rule definition, rejecting bad patterns up front.
    pub fn compile(definition: &TriggerRuleDefinition) -> Result<Self, VocabularyError> {
        let trigger = definition.trigger;
        if definition.reason.trim().is_empty() {
            return Err(VocabularyError::MissingReason { trigger });
        }
        if definition.patterns.is_empty() && definition.min_words.is_none() {
            return Err(VocabularyError::EmptyRule { trigger });
        }

        let patterns = definition
            .patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| VocabularyError::InvalidPattern {
                        trigger,
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            trigger,
            reason: definition.reason.trim().to_string(),
            specificity: definition.specificity,
            patterns,
            min_words: definition.min_words,
        })
    }

    pub fn trigger(&self) -> BehavioralTrigger {
        self.trigger
    }

    pub fn polarity(&self) -> Polarity {
        self.trigger.polarity()
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn specificity(&self) -> u8 {
        self.specificity
    }

    /// Tests the rule against already-normalized text.
    pub fn matches(&self, normalized: &str, word_count: usize) -> bool {
        if self.min_words.is_some_and(|min| word_count >= min) {
            return true;
        }
        self.patterns.iter().any(|re| re.is_match(normalized))
    }
}

/// Ordered set of compiled rules.
///
/// Order matters only for tie-breaking between equally specific rules.
#[derive(Debug, Clone, Default)]
pub struct TriggerVocabulary {
    rules: Vec<TriggerRule>,
}

impl TriggerVocabulary {
    /// Compiles every definition, failing on the first invalid one.
    pub fn compile(definitions: &[TriggerRuleDefinition]) -> Result<Self, VocabularyError> {
        let rules = definitions
            .iter()
            .map(TriggerRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Triggers that have no rule at all, and so can never be detected.
    pub fn uncovered_triggers(&self) -> Vec<BehavioralTrigger> {
        BehavioralTrigger::ALL
            .iter()
            .copied()
            .filter(|trigger| !self.rules.iter().any(|rule| rule.trigger == *trigger))
            .collect()
    }
}
