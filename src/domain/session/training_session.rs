//! Training session aggregate.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::foundation::{ConversationType, PhaseId, SessionId, Timestamp};
use crate::domain::gating::{GateEvaluator, ProgressDecision};
use crate::domain::playbook::Playbook;
use crate::domain::trigger::TriggerSet;
use crate::domain::trust::{EvidenceLog, PersonaStance, TrustDelta, TrustLedger, TrustLevel};
use crate::ports::Clock;

use super::errors::AdvanceError;
use super::snapshot::SessionSnapshot;

/// Record of a successful phase change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseTransition {
    pub from: PhaseId,
    pub to: PhaseId,
    /// Time spent in `from` before leaving it.
    pub dwell_seconds: u64,
    pub at: Timestamp,
}

/// One live rehearsal conversation.
///
/// Starts in the playbook's start phase with the trust seed of its
/// conversation type. Trust and earned triggers survive phase changes; only
/// the dwell clock is reset.
pub struct TrainingSession {
    id: SessionId,
    conversation_type: ConversationType,
    playbook: Arc<Playbook>,
    clock: Arc<dyn Clock>,
    current_phase: PhaseId,
    phase_entered_at: Timestamp,
    ledger: TrustLedger,
    triggers: TriggerSet,
    utterance_count: usize,
    created_at: Timestamp,
}

impl TrainingSession {
    pub fn new(
        playbook: Arc<Playbook>,
        conversation_type: ConversationType,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let now = clock.now();
        let seed = playbook.seed_for(conversation_type);
        let ledger = TrustLedger::new(playbook.classifier(), seed);
        let current_phase = playbook.catalog().start_id().clone();
        let id = SessionId::new();

        info!(
            session_id = %id,
            conversation_type = %conversation_type,
            phase = %current_phase,
            trust = seed.value(),
            "Training session started"
        );

        Self {
            id,
            conversation_type,
            playbook,
            clock,
            current_phase,
            phase_entered_at: now,
            ledger,
            triggers: TriggerSet::new(),
            utterance_count: 0,
            created_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn conversation_type(&self) -> ConversationType {
        self.conversation_type
    }

    pub fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    pub fn current_phase(&self) -> &PhaseId {
        &self.current_phase
    }

    pub fn trust_level(&self) -> TrustLevel {
        self.ledger.level()
    }

    pub fn stance(&self) -> PersonaStance {
        self.ledger.level().stance()
    }

    pub fn evidence(&self) -> &EvidenceLog {
        self.ledger.evidence()
    }

    /// Every trigger shown since the session started.
    pub fn accumulated_triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    pub fn utterance_count(&self) -> usize {
        self.utterance_count
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Whole seconds spent in the current phase.
    pub fn dwell_seconds(&self) -> u64 {
        self.clock.now().whole_secs_since(&self.phase_entered_at)
    }

    /// True once the session sits in a terminal phase.
    pub fn is_complete(&self) -> bool {
        self.playbook.catalog().is_terminal(&self.current_phase)
    }

    /// Declared successors of the current phase.
    pub fn next_phases(&self) -> &[PhaseId] {
        self.playbook.catalog().successors(&self.current_phase)
    }

    /// Classifies the utterance, updates trust and merges its triggers.
    ///
    /// Never fails; text with no recognizable behavior yields a zero delta.
    pub fn submit_utterance(&mut self, text: &str) -> TrustDelta {
        let delta = self.ledger.apply_utterance(text, self.clock.now());
        self.triggers.extend(delta.triggers.iter().copied());
        self.utterance_count += 1;

        debug!(
            session_id = %self.id,
            phase = %self.current_phase,
            delta = delta.delta,
            trust = delta.level.value(),
            detected = delta.triggers.len(),
            "Utterance applied"
        );

        delta
    }

    /// Whether `information_key` may be revealed in the current phase.
    pub fn can_disclose(&self, information_key: &str) -> bool {
        self.evaluator()
            .can_disclose(information_key, &self.current_phase, self.conversation_type)
    }

    /// Gate verdict for leaving the current phase, ignoring topology.
    pub fn check_progress(&self, target: &PhaseId) -> ProgressDecision {
        self.evaluator().can_progress(
            &self.current_phase,
            self.conversation_type,
            target,
            self.dwell_seconds(),
            &self.triggers,
        )
    }

    /// Full check for `advance_to` without changing state.
    pub fn can_progress_to(&self, target: &PhaseId) -> Result<(), AdvanceError> {
        if !self
            .playbook
            .catalog()
            .is_successor(&self.current_phase, target)
        {
            return Err(AdvanceError::InvalidTransition {
                from: self.current_phase.clone(),
                to: target.clone(),
            });
        }
        self.check_progress(target).into_result()?;
        Ok(())
    }

    /// Moves to `target` if it is a declared successor and the current gate
    /// is satisfied.
    ///
    /// On success the dwell clock restarts; trust and triggers are kept.
    pub fn advance_to(&mut self, target: &PhaseId) -> Result<PhaseTransition, AdvanceError> {
        if let Err(err) = self.can_progress_to(target) {
            match &err {
                AdvanceError::InvalidTransition { .. } => warn!(
                    session_id = %self.id,
                    from = %self.current_phase,
                    to = %target,
                    "Rejected transition to a non-successor phase"
                ),
                AdvanceError::GateNotSatisfied(denial) => debug!(
                    session_id = %self.id,
                    from = %self.current_phase,
                    to = %target,
                    reason = %denial,
                    "Phase advance blocked by gate"
                ),
            }
            return Err(err);
        }

        let now = self.clock.now();
        let transition = PhaseTransition {
            from: self.current_phase.clone(),
            to: target.clone(),
            dwell_seconds: now.whole_secs_since(&self.phase_entered_at),
            at: now,
        };
        self.current_phase = target.clone();
        self.phase_entered_at = now;

        info!(
            session_id = %self.id,
            from = %transition.from,
            to = %transition.to,
            dwell_seconds = transition.dwell_seconds,
            trust = self.ledger.level().value(),
            "Phase advanced"
        );

        Ok(transition)
    }

    /// Immutable view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let now = self.clock.now();
        let level = self.ledger.level();
        let phase_title = self
            .playbook
            .catalog()
            .get(&self.current_phase)
            .map(|phase| phase.title.clone())
            .unwrap_or_default();

        SessionSnapshot {
            session_id: self.id,
            conversation_type: self.conversation_type,
            phase: self.current_phase.clone(),
            phase_title,
            trust_level: level,
            stance: level.stance(),
            phase_entered_at: self.phase_entered_at,
            dwell_seconds: now.whole_secs_since(&self.phase_entered_at),
            evidence: self.ledger.evidence().entries().cloned().collect(),
            triggers: self.triggers.clone(),
            next_phases: self.next_phases().to_vec(),
            is_complete: self.is_complete(),
            taken_at: now,
        }
    }

    fn evaluator(&self) -> GateEvaluator<'_> {
        GateEvaluator::new(self.playbook.gates())
    }
}

impl fmt::Debug for TrainingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainingSession")
            .field("id", &self.id)
            .field("conversation_type", &self.conversation_type)
            .field("current_phase", &self.current_phase)
            .field("trust_level", &self.ledger.level())
            .field("triggers", &self.triggers)
            .finish_non_exhaustive()
    }
}
