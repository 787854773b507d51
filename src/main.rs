//! Console rehearsal of a sales conversation.
//!
//! Usage: `rapport-rehearsal [cold-call|scheduled-meeting]`

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::{error, info};

use rapport_engine::adapters::{EmbeddedPlaybookSource, MonotonicClock, YamlFilePlaybookSource};
use rapport_engine::application::{CommandOutcome, Rehearsal, RehearsalCommand, HELP_TEXT};
use rapport_engine::config::AppConfig;
use rapport_engine::domain::foundation::ConversationType;
use rapport_engine::observability;
use rapport_engine::ports::PlaybookSource;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    observability::init(&config.logging)?;

    let conversation_type = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<ConversationType>()?,
        None => config.engine.default_conversation_type,
    };

    let source: Box<dyn PlaybookSource> = match &config.engine.playbook_path {
        Some(path) => Box::new(YamlFilePlaybookSource::new(path)),
        None => Box::new(EmbeddedPlaybookSource),
    };
    let playbook = source.load().map_err(|e| {
        error!(source = %source.describe(), error = %e, "Failed to load playbook");
        e
    })?;
    info!(source = %source.describe(), "Playbook ready");

    let mut rehearsal = Rehearsal::start(
        Arc::new(playbook),
        conversation_type,
        Arc::new(MonotonicClock::new()),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{} rehearsal\n{}", conversation_type.label(), HELP_TEXT)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match RehearsalCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };
        let outcome = rehearsal.execute(command);
        writeln!(stdout, "{}", Rehearsal::render(&outcome))?;
        if outcome == CommandOutcome::Quit {
            break;
        }
    }

    let snapshot = rehearsal.session().snapshot();
    info!(
        session_id = %snapshot.session_id,
        phase = %snapshot.phase,
        trust = snapshot.trust_level.value(),
        utterances = rehearsal.session().utterance_count(),
        "Rehearsal finished"
    );
    Ok(())
}
