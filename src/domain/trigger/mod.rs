//! Trigger domain module.
//!
//! Detects conversational behaviors in trainee utterances using a
//! declarative pattern vocabulary.

mod behavioral_trigger;
mod classifier;
mod vocabulary;

pub use behavioral_trigger::{BehavioralTrigger, Polarity, TriggerSet};
pub use classifier::{normalize_utterance, Classification, RuleMatch, TriggerClassifier};
pub use vocabulary::{TriggerRule, TriggerRuleDefinition, TriggerVocabulary, VocabularyError};
