//! Integration tests for a training session running on the built-in playbook.
//!
//! These tests drive whole conversations through the public API:
//! 1. Utterances are classified and move trust
//! 2. Gates hold the conversation in a phase until dwell time and triggers are met
//! 3. Advancing resets the dwell clock but keeps trust and earned triggers
//!
//! Time is driven by a `ManualClock` so dwell checks are exact.

use std::sync::Arc;

use rapport_engine::adapters::ManualClock;
use rapport_engine::domain::foundation::{ConversationType, PhaseId, Timestamp};
use rapport_engine::domain::gating::GateDenial;
use rapport_engine::domain::playbook::Playbook;
use rapport_engine::domain::session::{AdvanceError, TrainingSession};
use rapport_engine::domain::trigger::BehavioralTrigger;

// =============================================================================
// Test Infrastructure
// =============================================================================

const INTRO: &str =
    "Hi, my name is Alex from Northwind. What are your biggest challenges with scheduling today?";
const PURPOSE: &str =
    "The reason I'm calling is that clinics often lose hours to manual rota planning.";
const SECTOR: &str = "Companies in your sector usually struggle with last-minute absences.";

fn phase(id: &str) -> PhaseId {
    PhaseId::new(id).unwrap()
}

fn start(conversation_type: ConversationType) -> (TrainingSession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(Timestamp::from_unix_secs(1_700_000_000)));
    let playbook = Arc::new(Playbook::builtin().expect("built-in playbook must load"));
    let session = TrainingSession::new(playbook, conversation_type, clock.clone());
    (session, clock)
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn cold_call_walks_from_opening_to_qualification() {
    let (mut session, clock) = start(ConversationType::ColdCall);
    assert_eq!(session.trust_level().value(), 0);
    assert_eq!(session.current_phase(), &phase("opening"));

    let delta = session.submit_utterance(INTRO);
    assert_eq!(delta.delta, 1);
    assert_eq!(session.trust_level().value(), 1);
    assert!(delta.triggers.contains(&BehavioralTrigger::SelfIdentifies));
    assert!(delta.triggers.contains(&BehavioralTrigger::AsksOpenQuestion));

    // Triggers alone are not enough before the dwell time.
    session.submit_utterance(PURPOSE);
    clock.advance_secs(29);
    assert_eq!(
        session.advance_to(&phase("discovery")).unwrap_err(),
        AdvanceError::GateNotSatisfied(GateDenial::DwellTimeRemaining {
            remaining_seconds: 1,
            minimum_seconds: 30,
        })
    );

    clock.advance_secs(1);
    let transition = session.advance_to(&phase("discovery")).unwrap();
    assert_eq!(transition.dwell_seconds, 30);
    assert_eq!(session.current_phase(), &phase("discovery"));
    assert_eq!(session.dwell_seconds(), 0);
    assert_eq!(session.trust_level().value(), 2);

    // Discovery needs sector fit; the open question from the opening still counts.
    clock.advance_secs(90);
    let err = session.advance_to(&phase("qualification")).unwrap_err();
    assert_eq!(
        err.denial().map(|d| d.missing_triggers().to_vec()),
        Some(vec![BehavioralTrigger::DemonstratesSectorFit])
    );

    session.submit_utterance(SECTOR);
    session.advance_to(&phase("qualification")).unwrap();
    assert_eq!(session.trust_level().value(), 3);
    assert_eq!(session.evidence().len(), 3);
}

#[test]
fn scheduled_meeting_reaches_closing() {
    let (mut session, clock) = start(ConversationType::ScheduledMeeting);
    assert_eq!(session.trust_level().value(), 2);

    session.submit_utterance(
        "The purpose of this meeting is to understand your process. How do you plan rotas today?",
    );
    clock.advance_secs(15);
    session.advance_to(&phase("discovery")).unwrap();
    clock.advance_secs(60);
    session.advance_to(&phase("presentation")).unwrap();
    session.advance_to(&phase("closing")).unwrap();

    let snapshot = session.snapshot();
    assert!(snapshot.is_complete);
    assert!(snapshot.next_phases.is_empty());
    assert_eq!(snapshot.trust_level.value(), 3);
}

// =============================================================================
// Trust
// =============================================================================

#[test]
fn pitch_padded_with_open_question_costs_trust() {
    let (mut session, _) = start(ConversationType::ScheduledMeeting);
    let delta = session.submit_utterance(
        "Our platform will cut your costs in half, so what are your biggest challenges?",
    );

    assert_eq!(delta.delta, -1);
    assert_eq!(
        delta.reason.as_deref(),
        Some("pitched the product before understanding the need")
    );
    assert!(delta.triggers.contains(&BehavioralTrigger::AsksOpenQuestion));
    assert_eq!(session.trust_level().value(), 1);
}

#[test]
fn negative_at_floor_is_logged_but_saturates() {
    let (mut session, _) = start(ConversationType::ColdCall);
    let delta = session.submit_utterance("We have the best solution on the market.");

    assert_eq!(delta.delta, -1);
    assert!(delta.saturated);
    assert_eq!(session.trust_level().value(), 0);
    assert_eq!(
        session.evidence().lines(),
        vec!["-1: made an unsubstantiated superlative claim".to_string()]
    );
}

#[test]
fn evidence_log_evicts_oldest_entry() {
    let (mut session, _) = start(ConversationType::ScheduledMeeting);
    let utterances = [
        "My name is Alex.",
        "Guaranteed ROI within a month.",
        "In other words, rota planning eats your Mondays.",
        "Let me tell you about our features.",
        "Who else is involved in the decision?",
        "Can we find time next week to follow up?",
    ];
    for utterance in utterances {
        session.submit_utterance(utterance);
    }

    assert_eq!(session.trust_level().value(), 4);
    assert_eq!(
        session.evidence().lines(),
        vec![
            "-1: made an unsubstantiated superlative claim",
            "+1: reformulated what the prospect said",
            "-1: pitched the product before understanding the need",
            "+1: explored the decision process and budget ownership",
            "+1: proposed a concrete follow-up",
        ]
    );
}

// =============================================================================
// Gates and topology
// =============================================================================

#[test]
fn topology_is_checked_before_gate() {
    let (mut session, clock) = start(ConversationType::ColdCall);
    session.submit_utterance(INTRO);
    session.submit_utterance(PURPOSE);
    clock.advance_secs(300);

    let err = session.advance_to(&phase("presentation")).unwrap_err();
    assert!(matches!(err, AdvanceError::InvalidTransition { .. }));
    assert!(!err.is_recoverable());
    assert_eq!(session.current_phase(), &phase("opening"));
    assert_eq!(session.dwell_seconds(), 300);
}

#[test]
fn unlisted_key_is_withheld_in_gated_phase() {
    let (session, _) = start(ConversationType::ColdCall);
    assert!(session.can_disclose("company-name"));
    assert!(!session.can_disclose("budget"));
    assert!(!session.can_disclose("team-size"));
}

#[test]
fn ungated_phase_is_permissive() {
    let (mut session, clock) = start(ConversationType::ScheduledMeeting);
    session.submit_utterance(
        "The purpose of this meeting is to understand your process. How do you plan rotas today?",
    );
    clock.advance_secs(15);
    session.advance_to(&phase("discovery")).unwrap();
    clock.advance_secs(60);
    session.advance_to(&phase("presentation")).unwrap();

    assert!(session.can_disclose("competitor-quotes"));
    assert!(session.can_disclose("anything-at-all"));
    assert!(session.check_progress(&phase("closing")).is_allowed());
    assert_eq!(session.dwell_seconds(), 0);
}
