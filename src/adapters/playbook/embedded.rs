//! Built-in playbook source.

use crate::domain::playbook::{Playbook, PlaybookError};
use crate::ports::PlaybookSource;

/// Loads the sales playbook embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPlaybookSource;

impl PlaybookSource for EmbeddedPlaybookSource {
    fn load(&self) -> Result<Playbook, PlaybookError> {
        Playbook::builtin()
    }

    fn describe(&self) -> String {
        "built-in playbook".to_string()
    }
}
