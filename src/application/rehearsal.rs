//! Rehearsal driver.

use std::fmt::Write as _;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{ConversationType, PhaseId, ValidationError};
use crate::domain::playbook::Playbook;
use crate::domain::session::{AdvanceError, PhaseTransition, SessionSnapshot, TrainingSession};
use crate::domain::trust::TrustDelta;
use crate::ports::Clock;

pub const HELP_TEXT: &str = "\
Type what you would say to the prospect, or one of:
  /advance <phase>   move to a successor phase
  /reveal <key>      ask whether the prospect may disclose a fact
  /status            show phase, trust, triggers and evidence
  /snapshot          print the session state as JSON
  /help              show this help
  /quit              end the rehearsal";

/// One line of trainee input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RehearsalCommand {
    Say(String),
    Advance(PhaseId),
    Reveal(String),
    Status,
    Snapshot,
    Help,
    Quit,
}

/// Input that looked like a command but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Unknown command '/{0}', try /help")]
    UnknownCommand(String),

    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid phase: {0}")]
    InvalidPhase(#[from] ValidationError),
}

impl RehearsalCommand {
    /// Lines starting with `/` are commands; anything else is speech.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Self::Say(line.to_string()));
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        match name.to_lowercase().as_str() {
            "advance" | "go" => {
                if argument.is_empty() {
                    return Err(CommandParseError::MissingArgument("advance"));
                }
                Ok(Self::Advance(PhaseId::new(argument)?))
            }
            "reveal" => {
                if argument.is_empty() {
                    return Err(CommandParseError::MissingArgument("reveal"));
                }
                Ok(Self::Reveal(argument.to_string()))
            }
            "status" => Ok(Self::Status),
            "snapshot" | "json" => Ok(Self::Snapshot),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Said(TrustDelta),
    Advanced(PhaseTransition),
    AdvanceRefused(AdvanceError),
    Disclosure { key: String, allowed: bool },
    Status(SessionSnapshot),
    Snapshot(SessionSnapshot),
    Help,
    Quit,
}

/// A console rehearsal around one training session.
#[derive(Debug)]
pub struct Rehearsal {
    session: TrainingSession,
}

impl Rehearsal {
    pub fn start(
        playbook: Arc<Playbook>,
        conversation_type: ConversationType,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session: TrainingSession::new(playbook, conversation_type, clock),
        }
    }

    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    pub fn execute(&mut self, command: RehearsalCommand) -> CommandOutcome {
        match command {
            RehearsalCommand::Say(text) => CommandOutcome::Said(self.session.submit_utterance(&text)),
            RehearsalCommand::Advance(target) => match self.session.advance_to(&target) {
                Ok(transition) => CommandOutcome::Advanced(transition),
                Err(err) => CommandOutcome::AdvanceRefused(err),
            },
            RehearsalCommand::Reveal(key) => {
                let allowed = self.session.can_disclose(&key);
                CommandOutcome::Disclosure { key, allowed }
            }
            RehearsalCommand::Status => CommandOutcome::Status(self.session.snapshot()),
            RehearsalCommand::Snapshot => CommandOutcome::Snapshot(self.session.snapshot()),
            RehearsalCommand::Help => CommandOutcome::Help,
            RehearsalCommand::Quit => CommandOutcome::Quit,
        }
    }

    /// Text shown to the trainee.
    pub fn render(outcome: &CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Said(delta) => render_delta(delta),
            CommandOutcome::Advanced(transition) => format!(
                "Moved {} -> {} after {}s",
                transition.from, transition.to, transition.dwell_seconds
            ),
            CommandOutcome::AdvanceRefused(err) => err.to_string(),
            CommandOutcome::Disclosure { key, allowed: true } => {
                format!("{}: the prospect may disclose this", key)
            }
            CommandOutcome::Disclosure { key, allowed: false } => {
                format!("{}: the prospect withholds this", key)
            }
            CommandOutcome::Status(snapshot) => render_status(snapshot),
            CommandOutcome::Snapshot(snapshot) => snapshot
                .to_json()
                .unwrap_or_else(|e| format!("Failed to serialize snapshot: {}", e)),
            CommandOutcome::Help => HELP_TEXT.to_string(),
            CommandOutcome::Quit => "Rehearsal ended".to_string(),
        }
    }
}

fn render_delta(delta: &TrustDelta) -> String {
    let mut out = match &delta.reason {
        Some(reason) if delta.saturated => {
            format!("trust {:+} (at bound) {}: {}", delta.delta, delta.level, reason)
        }
        Some(reason) => format!("trust {:+} -> {}: {}", delta.delta, delta.level, reason),
        None => format!("trust unchanged at {}", delta.level),
    };
    if !delta.triggers.is_empty() {
        let tags: Vec<&str> = delta.triggers.iter().map(|t| t.as_str()).collect();
        let _ = write!(out, " [{}]", tags.join(", "));
    }
    out
}

fn render_status(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "phase: {} ({}), {}s",
        snapshot.phase_title, snapshot.phase, snapshot.dwell_seconds
    );
    let _ = writeln!(
        out,
        "trust: {} {} - {}",
        snapshot.trust_level,
        snapshot.stance.label(),
        snapshot.stance.directive()
    );
    if snapshot.is_complete {
        let _ = writeln!(out, "next: (conversation complete)");
    } else {
        let next: Vec<&str> = snapshot.next_phases.iter().map(|p| p.as_str()).collect();
        let _ = writeln!(out, "next: {}", next.join(", "));
    }
    let triggers: Vec<&str> = snapshot.triggers.iter().map(|t| t.as_str()).collect();
    let _ = writeln!(out, "triggers: {}", triggers.join(", "));
    let _ = write!(out, "evidence:");
    for line in snapshot.evidence_lines() {
        let _ = write!(out, "\n  {}", line);
    }
    out
}
