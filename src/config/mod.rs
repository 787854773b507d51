//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `RAPPORT` prefix and
//! nested values are separated by double underscores. Every field has a
//! default, so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use rapport_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration (playbook, default conversation type)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `RAPPORT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `RAPPORT__ENGINE__PLAYBOOK_PATH=./playbook.yaml` -> `engine.playbook_path`
    /// - `RAPPORT__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RAPPORT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the playbook path does not exist or the
    /// log filter cannot be parsed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConversationType;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("RAPPORT__ENGINE__PLAYBOOK_PATH");
        env::remove_var("RAPPORT__ENGINE__DEFAULT_CONVERSATION_TYPE");
        env::remove_var("RAPPORT__LOGGING__LEVEL");
        env::remove_var("RAPPORT__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.engine.playbook_path.is_none());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RAPPORT__ENGINE__DEFAULT_CONVERSATION_TYPE", "scheduled-meeting");
        env::set_var("RAPPORT__LOGGING__FORMAT", "json");
        env::set_var("RAPPORT__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.engine.default_conversation_type,
            ConversationType::ScheduledMeeting
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_missing_playbook() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RAPPORT__ENGINE__PLAYBOOK_PATH", "/nonexistent/playbook.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::PlaybookNotFound(_))
        ));
    }
}
