//! Gates - disclosure and progression policy per (phase, conversation type).

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::domain::foundation::{ConversationType, PhaseId};
use crate::domain::trigger::{BehavioralTrigger, TriggerSet};

use super::errors::PlaybookError;

/// Composite key of the gate table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GateKey {
    pub phase: PhaseId,
    pub conversation_type: ConversationType,
}

impl GateKey {
    pub fn new(phase: PhaseId, conversation_type: ConversationType) -> Self {
        Self {
            phase,
            conversation_type,
        }
    }
}

/// Policy attached to one (phase, conversation type) pair.
///
/// Within a gated phase disclosure is closed-world: a key that is neither
/// allowed nor blocked stays undisclosed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gate {
    allowed: BTreeSet<String>,
    blocked: BTreeSet<String>,
    minimum_dwell_seconds: u64,
    required_triggers: TriggerSet,
}

impl Gate {
    /// Builds a gate; the allowed and blocked sets must be disjoint.
    pub fn new(
        key: &GateKey,
        allowed: impl IntoIterator<Item = String>,
        blocked: impl IntoIterator<Item = String>,
        minimum_dwell_seconds: u64,
        required_triggers: impl IntoIterator<Item = BehavioralTrigger>,
    ) -> Result<Self, PlaybookError> {
        let allowed: BTreeSet<String> = allowed.into_iter().map(|k| normalize_key(&k)).collect();
        let blocked: BTreeSet<String> = blocked.into_iter().map(|k| normalize_key(&k)).collect();

        let overlap: Vec<String> = allowed.intersection(&blocked).cloned().collect();
        if !overlap.is_empty() {
            return Err(PlaybookError::OverlappingDisclosure {
                phase: key.phase.clone(),
                conversation_type: key.conversation_type,
                keys: overlap,
            });
        }

        Ok(Self {
            allowed,
            blocked,
            minimum_dwell_seconds,
            required_triggers: required_triggers.into_iter().collect(),
        })
    }

    /// Blocked wins, then allowed, otherwise deny.
    pub fn permits(&self, information_key: &str) -> bool {
        let key = normalize_key(information_key);
        if self.blocked.contains(&key) {
            return false;
        }
        self.allowed.contains(&key)
    }

    /// Seconds still to wait, or `None` once the dwell time is met.
    pub fn remaining_dwell(&self, dwell_seconds: u64) -> Option<u64> {
        (dwell_seconds < self.minimum_dwell_seconds)
            .then(|| self.minimum_dwell_seconds - dwell_seconds)
    }

    /// Required triggers not yet accumulated, in declaration order.
    pub fn missing_triggers(&self, accumulated: &TriggerSet) -> Vec<BehavioralTrigger> {
        self.required_triggers.difference(accumulated).copied().collect()
    }

    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    pub fn blocked(&self) -> &BTreeSet<String> {
        &self.blocked
    }

    pub fn minimum_dwell_seconds(&self) -> u64 {
        self.minimum_dwell_seconds
    }

    pub fn required_triggers(&self) -> &TriggerSet {
        &self.required_triggers
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Immutable lookup table of gates.
#[derive(Debug, Clone, Default)]
pub struct GateTable {
    gates: HashMap<GateKey, Gate>,
}

impl GateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a gate, rejecting a second gate for the same key.
    pub fn insert(&mut self, key: GateKey, gate: Gate) -> Result<(), PlaybookError> {
        if self.gates.contains_key(&key) {
            return Err(PlaybookError::DuplicateGate {
                phase: key.phase,
                conversation_type: key.conversation_type,
            });
        }
        self.gates.insert(key, gate);
        Ok(())
    }

    pub fn get(&self, phase: &PhaseId, conversation_type: ConversationType) -> Option<&Gate> {
        self.gates
            .get(&GateKey::new(phase.clone(), conversation_type))
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GateKey> {
        self.gates.keys()
    }
}
