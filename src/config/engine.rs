//! Engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::foundation::ConversationType;

use super::error::ValidationError;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Playbook YAML file; the built-in playbook is used when unset
    pub playbook_path: Option<PathBuf>,

    /// Conversation type used when none is given on the command line
    #[serde(default)]
    pub default_conversation_type: ConversationType,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.playbook_path {
            if !path.is_file() {
                return Err(ValidationError::PlaybookNotFound(path.clone()));
            }
        }
        Ok(())
    }
}
