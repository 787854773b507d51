//! Evidence log - the rolling explanation of trust changes.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Number of entries the evidence log retains.
pub const EVIDENCE_CAPACITY: usize = 5;

/// One justified trust change.
///
/// `delta` is the attempted change; `saturated` marks entries where the
/// scale bound kept the level from moving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub delta: i8,
    pub reason: String,
    pub saturated: bool,
    pub recorded_at: Timestamp,
}

impl fmt::Display for EvidenceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}: {}", self.delta, self.reason)
    }
}

/// Fixed-capacity ring buffer of evidence entries, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceLog {
    entries: VecDeque<EvidenceEntry>,
}

impl EvidenceLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(EVIDENCE_CAPACITY),
        }
    }

    /// Appends an entry, evicting the oldest once full.
    pub fn record(&mut self, entry: EvidenceEntry) {
        if self.entries.len() == EVIDENCE_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &EvidenceEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&EvidenceEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries rendered as `"+1: reason"` strings, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl Default for EvidenceLog {
    fn default() -> Self {
        Self::new()
    }
}
