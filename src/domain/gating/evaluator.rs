//! Gate evaluator.

use tracing::debug;

use crate::domain::foundation::{ConversationType, PhaseId};
use crate::domain::playbook::GateTable;
use crate::domain::trigger::TriggerSet;

use super::decision::{GateDenial, ProgressDecision};

/// Read-only view over a gate table.
///
/// Phases without a gate for the conversation type are unrestricted: every
/// key may be disclosed and progression is always allowed.
#[derive(Debug, Clone, Copy)]
pub struct GateEvaluator<'a> {
    gates: &'a GateTable,
}

impl<'a> GateEvaluator<'a> {
    pub fn new(gates: &'a GateTable) -> Self {
        Self { gates }
    }

    /// Whether `information_key` may be revealed in `phase`.
    pub fn can_disclose(
        &self,
        information_key: &str,
        phase: &PhaseId,
        conversation_type: ConversationType,
    ) -> bool {
        match self.gates.get(phase, conversation_type) {
            Some(gate) => gate.permits(information_key),
            None => true,
        }
    }

    /// Whether the conversation may leave `current` for `target`.
    ///
    /// Dwell time is checked before triggers, so a phase that is both too
    /// short and incomplete reports the time deficit.
    pub fn can_progress(
        &self,
        current: &PhaseId,
        conversation_type: ConversationType,
        target: &PhaseId,
        dwell_seconds: u64,
        accumulated: &TriggerSet,
    ) -> ProgressDecision {
        let Some(gate) = self.gates.get(current, conversation_type) else {
            return ProgressDecision::Allowed;
        };

        if let Some(remaining_seconds) = gate.remaining_dwell(dwell_seconds) {
            debug!(
                phase = %current,
                target = %target,
                dwell_seconds,
                remaining_seconds,
                "Progression denied: dwell time"
            );
            return ProgressDecision::Denied(GateDenial::DwellTimeRemaining {
                remaining_seconds,
                minimum_seconds: gate.minimum_dwell_seconds(),
            });
        }

        let missing = gate.missing_triggers(accumulated);
        if !missing.is_empty() {
            debug!(
                phase = %current,
                target = %target,
                missing = ?missing,
                "Progression denied: missing triggers"
            );
            return ProgressDecision::Denied(GateDenial::MissingTriggers { missing });
        }

        ProgressDecision::Allowed
    }
}
