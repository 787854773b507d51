//! Playbook domain module.
//!
//! A playbook is the canonical, validated configuration of the engine: the
//! phase catalog, the gate table, the trigger vocabulary and the trust seeds.
//! It is loaded once at startup and shared read-only between sessions.

mod definition;
mod errors;
mod gate;
mod phase;

pub use definition::{GateDefinition, PlaybookDefinition, TrustSeedsDefinition};
pub use errors::PlaybookError;
pub use gate::{Gate, GateKey, GateTable};
pub use phase::{PhaseCatalog, SalesPhase};

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{ConversationType, PhaseId};
use crate::domain::trigger::{TriggerClassifier, TriggerVocabulary};
use crate::domain::trust::TrustLevel;

/// Source text of the playbook compiled into the crate.
pub const BUILTIN_PLAYBOOK_YAML: &str = include_str!("builtin_playbook.yaml");

const DEFAULT_START_PHASE: &str = "opening";

/// Initial trust per conversation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustSeeds {
    cold_call: TrustLevel,
    scheduled_meeting: TrustLevel,
}

impl TrustSeeds {
    pub fn new(cold_call: TrustLevel, scheduled_meeting: TrustLevel) -> Self {
        Self {
            cold_call,
            scheduled_meeting,
        }
    }

    pub fn for_type(&self, conversation_type: ConversationType) -> TrustLevel {
        match conversation_type {
            ConversationType::ColdCall => self.cold_call,
            ConversationType::ScheduledMeeting => self.scheduled_meeting,
        }
    }

    fn from_definition(definition: &TrustSeedsDefinition) -> Result<Self, PlaybookError> {
        let seed = |value: u8, conversation_type: ConversationType| {
            TrustLevel::new(value).map_err(|source| PlaybookError::InvalidSeed {
                conversation_type,
                source,
            })
        };
        Ok(Self {
            cold_call: seed(definition.cold_call, ConversationType::ColdCall)?,
            scheduled_meeting: seed(
                definition.scheduled_meeting,
                ConversationType::ScheduledMeeting,
            )?,
        })
    }
}

/// Validated, immutable engine configuration.
#[derive(Debug, Clone)]
pub struct Playbook {
    catalog: PhaseCatalog,
    gates: GateTable,
    classifier: Arc<TriggerClassifier>,
    seeds: TrustSeeds,
}

impl Playbook {
    /// Parses and validates the playbook compiled into the crate.
    pub fn builtin() -> Result<Self, PlaybookError> {
        Self::from_yaml_str(BUILTIN_PLAYBOOK_YAML)
    }

    /// Parses and validates a YAML playbook document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PlaybookError> {
        let definition: PlaybookDefinition = serde_yaml::from_str(yaml)?;
        Self::from_definition(definition)
    }

    /// Validates a parsed definition into lookup tables.
    ///
    /// Fails on the first inconsistency: unknown or duplicate phases, cycles,
    /// gates for unknown phases, overlapping disclosure sets, seeds off the
    /// trust scale, or malformed trigger rules.
    pub fn from_definition(definition: PlaybookDefinition) -> Result<Self, PlaybookError> {
        let start = match definition.start_phase {
            Some(start) => start,
            None => PhaseId::new(DEFAULT_START_PHASE)?,
        };
        let catalog = PhaseCatalog::new(start, definition.phases)?;

        let mut gates = GateTable::new();
        for gate in definition.gates {
            if !catalog.contains(&gate.phase) {
                return Err(PlaybookError::UnknownGatePhase(gate.phase));
            }
            let key = GateKey::new(gate.phase, gate.conversation_type);
            let compiled = Gate::new(
                &key,
                gate.allowed,
                gate.blocked,
                gate.minimum_dwell_seconds,
                gate.required_triggers,
            )?;
            gates.insert(key, compiled)?;
        }

        let vocabulary = TriggerVocabulary::compile(&definition.triggers)?;
        let uncovered = vocabulary.uncovered_triggers();
        if !uncovered.is_empty() {
            debug!(?uncovered, "Some triggers have no detection rule");
        }

        let seeds = TrustSeeds::from_definition(&definition.trust_seeds)?;

        info!(
            phases = catalog.len(),
            gates = gates.len(),
            trigger_rules = vocabulary.len(),
            start_phase = %catalog.start_id(),
            "Playbook loaded"
        );

        Ok(Self {
            catalog,
            gates,
            classifier: Arc::new(TriggerClassifier::new(vocabulary)),
            seeds,
        })
    }

    pub fn catalog(&self) -> &PhaseCatalog {
        &self.catalog
    }

    pub fn gates(&self) -> &GateTable {
        &self.gates
    }

    /// Shared handle to the classifier built from this playbook's vocabulary.
    pub fn classifier(&self) -> Arc<TriggerClassifier> {
        Arc::clone(&self.classifier)
    }

    pub fn seeds(&self) -> TrustSeeds {
        self.seeds
    }

    pub fn seed_for(&self, conversation_type: ConversationType) -> TrustLevel {
        self.seeds.for_type(conversation_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trigger::BehavioralTrigger;

    fn id(value: &str) -> PhaseId {
        PhaseId::new(value).unwrap()
    }

    mod builtin {
        use super::*;

        #[test]
        fn builtin_playbook_is_valid() {
            let playbook = Playbook::builtin().unwrap();
            assert_eq!(playbook.catalog().start_id(), &id("opening"));
            assert_eq!(playbook.catalog().len(), 6);
            assert_eq!(playbook.gates().len(), 6);
        }

        #[test]
        fn builtin_seeds_match_conversation_types() {
            let playbook = Playbook::builtin().unwrap();
            assert_eq!(playbook.seed_for(ConversationType::ColdCall).value(), 0);
            assert_eq!(playbook.seed_for(ConversationType::ScheduledMeeting).value(), 2);
        }

        #[test]
        fn builtin_vocabulary_covers_every_trigger() {
            let playbook = Playbook::builtin().unwrap();
            assert!(playbook.classifier().vocabulary().uncovered_triggers().is_empty());
        }

        #[test]
        fn builtin_closing_is_terminal() {
            let playbook = Playbook::builtin().unwrap();
            assert!(playbook.catalog().is_terminal(&id("closing")));
        }

        fn fires(utterance: &str, trigger: BehavioralTrigger) -> bool {
            Playbook::builtin()
                .unwrap()
                .classifier()
                .classify(utterance)
                .contains(&trigger)
        }

        fn words(count: usize) -> String {
            vec!["rota"; count].join(" ")
        }

        #[test]
        fn every_builtin_trigger_fires_on_its_samples() {
            use BehavioralTrigger::*;
            let samples: &[(BehavioralTrigger, &str)] = &[
                (UsesGenericClaims, "We offer guaranteed ROI."),
                (UsesGenericClaims, "It is the best platform on the market."),
                (UsesGenericClaims, "We are the #1 platform in the market."),
                (UsesGenericClaims, "Honestly, we are a leading provider in the industry."),
                (UsesGenericClaims, "Customers get 100% satisfaction."),
                (UsesGenericClaims, "No one else can do this better."),
                (UsesGenericClaims, "It is truly revolutionary."),
                (PitchesPrematurely, "Our product can automate your rota."),
                (PitchesPrematurely, "Let me show you what our tool does."),
                (PitchesPrematurely, "We provide a scheduling suite."),
                (PitchesPrematurely, "You should sign up for our plan."),
                (PitchesPrematurely, "There is a special discount this week."),
                (NameDrops, "Google uses us for this."),
                (NameDrops, "All the big companies use us."),
                (NameDrops, "Our clients include several banks."),
                (NameDrops, "Everyone is using it now."),
                (LaunchesMonologue, "Let me walk you through a quick demo."),
                (LaunchesMonologue, "I can do a full demo of our platform."),
                (ProbesDecisionProcess, "Who else would be involved in choosing a tool?"),
                (ProbesDecisionProcess, "Who signs off on the budget?"),
                (ProbesDecisionProcess, "How does your team usually decide on new software?"),
                (ProbesDecisionProcess, "What does your buying process look like?"),
                (ProbesDecisionProcess, "Is there a budget owner?"),
                (Reformulates, "If I understand you correctly, Mondays are the worst."),
                (Reformulates, "So what I'm hearing is that absences hurt."),
                (Reformulates, "Let me make sure I understand the problem."),
                (Reformulates, "In other words, planning takes too long."),
                (ProposesFollowUp, "Shall we schedule a call for Thursday?"),
                (ProposesFollowUp, "Would next Tuesday work for you?"),
                (ProposesFollowUp, "Can we put time in the diary?"),
                (ProposesFollowUp, "I'll send a follow-up meeting invite."),
                (ArticulatesValue, "That could free up two hours a week."),
                (ArticulatesValue, "So you could focus on patient care."),
                (ArticulatesValue, "The benefit for your team is fewer calls."),
                (AsksOpenQuestion, "How do you handle absences?"),
                (AsksOpenQuestion, "Can you walk me through your week?"),
                (AsksOpenQuestion, "Tell me more about that."),
                (AsksOpenQuestion, "What is your main concern?"),
                (DemonstratesSectorFit, "Firms like yours often outgrow spreadsheets."),
                (DemonstratesSectorFit, "In your industry compliance is strict."),
                (DemonstratesSectorFit, "We already work with several dental clinics."),
                (DemonstratesExpertise, "In my experience the rota is the bottleneck."),
                (DemonstratesExpertise, "What we usually see is overtime creeping up."),
                (DemonstratesExpertise, "Typically, teams plan a month ahead."),
                (DemonstratesExpertise, "The data shows fewer no-shows."),
                (StatesPurpose, "The reason I'm calling is your expansion."),
                (StatesPurpose, "I\u{2019}m reaching out about your new clinic."),
                (StatesPurpose, "The goal of today's call is to learn."),
                (StatesPurpose, "I wanted to ask about your rota."),
                (SelfIdentifies, "My name is Priya."),
                (SelfIdentifies, "This is Priya from Northwind."),
                (SelfIdentifies, "I'm Priya with Northwind."),
                (SelfIdentifies, "I work for Northwind."),
            ];
            for (trigger, utterance) in samples {
                assert!(fires(utterance, *trigger), "{:?} should fire {}", utterance, trigger);
            }
        }

        #[test]
        fn near_misses_do_not_fire() {
            use BehavioralTrigger::*;
            let samples: &[(BehavioralTrigger, &str)] = &[
                (UsesGenericClaims, "Our results depend on your setup."),
                (UsesGenericClaims, "We ranked #1 in a survey."),
                (PitchesPrematurely, "Our team spoke last year."),
                (NameDrops, "We migrated off Google Sheets."),
                (LaunchesMonologue, "I can send a short summary."),
                (ProbesDecisionProcess, "Who are you meeting today?"),
                (Reformulates, "I understand."),
                (ProposesFollowUp, "We can talk later."),
                (ArticulatesValue, "That was expensive."),
                (AsksOpenQuestion, "Is that right?"),
                (DemonstratesSectorFit, "Companies grow."),
                (DemonstratesExpertise, "Typically."),
                (StatesPurpose, "I wanted lunch."),
                (SelfIdentifies, "My rota is full."),
            ];
            for (trigger, utterance) in samples {
                assert!(!fires(utterance, *trigger), "{:?} should not fire {}", utterance, trigger);
            }
        }

        #[test]
        fn monologue_threshold_starts_at_eighty_words() {
            assert!(!fires(&words(79), BehavioralTrigger::LaunchesMonologue));
            assert!(fires(&words(80), BehavioralTrigger::LaunchesMonologue));
        }

        #[test]
        fn builtin_presentation_is_ungated() {
            let playbook = Playbook::builtin().unwrap();
            for conversation_type in ConversationType::ALL {
                assert!(playbook.gates().get(&id("presentation"), conversation_type).is_none());
            }
        }
    }

    mod validation {
        use super::*;

        const PHASES: &str = r#"
phases:
  - id: opening
    title: Opening
    successors: [discovery]
  - id: discovery
    title: Discovery
"#;

        #[test]
        fn defaults_start_phase_to_opening() {
            let playbook = Playbook::from_yaml_str(PHASES).unwrap();
            assert_eq!(playbook.catalog().start_id(), &id("opening"));
        }

        #[test]
        fn rejects_gate_for_unknown_phase() {
            let yaml = format!(
                "{}gates:\n  - phase: closing\n    conversation_type: cold-call\n",
                PHASES
            );
            assert_eq!(
                Playbook::from_yaml_str(&yaml).unwrap_err(),
                PlaybookError::UnknownGatePhase(id("closing"))
            );
        }

        #[test]
        fn rejects_overlapping_gate_sets() {
            let yaml = format!(
                "{}gates:\n  - phase: opening\n    conversation_type: cold-call\n    allowed: [budget]\n    blocked: [budget]\n",
                PHASES
            );
            assert!(matches!(
                Playbook::from_yaml_str(&yaml).unwrap_err(),
                PlaybookError::OverlappingDisclosure { .. }
            ));
        }

        #[test]
        fn rejects_seed_off_scale() {
            let yaml = format!("trust_seeds:\n  cold-call: 7\n{}", PHASES);
            assert!(matches!(
                Playbook::from_yaml_str(&yaml).unwrap_err(),
                PlaybookError::InvalidSeed {
                    conversation_type: ConversationType::ColdCall,
                    ..
                }
            ));
        }

        #[test]
        fn rejects_invalid_trigger_pattern() {
            let yaml = format!(
                "{}triggers:\n  - trigger: name-drops\n    reason: dropped names\n    patterns: ['(oops']\n",
                PHASES
            );
            assert!(matches!(
                Playbook::from_yaml_str(&yaml).unwrap_err(),
                PlaybookError::Vocabulary(_)
            ));
        }

        #[test]
        fn rejects_malformed_yaml() {
            assert!(matches!(
                Playbook::from_yaml_str("phases: [unterminated").unwrap_err(),
                PlaybookError::Parse(_)
            ));
        }

        #[test]
        fn gate_required_triggers_are_kept() {
            let yaml = format!(
                "{}gates:\n  - phase: opening\n    conversation_type: scheduled-meeting\n    required_triggers: [states-purpose]\n",
                PHASES
            );
            let playbook = Playbook::from_yaml_str(&yaml).unwrap();
            let gate = playbook
                .gates()
                .get(&id("opening"), ConversationType::ScheduledMeeting)
                .unwrap();
            assert!(gate.required_triggers().contains(&BehavioralTrigger::StatesPurpose));
        }
    }
}
