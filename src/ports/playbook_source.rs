//! Playbook Source Port - Interface for loading the engine configuration.

use crate::domain::playbook::{Playbook, PlaybookError};

/// Port for obtaining a validated playbook.
///
/// Loading happens once at startup; a failure here is fatal to the process.
pub trait PlaybookSource {
    /// Loads and validates the playbook.
    ///
    /// # Errors
    ///
    /// Returns `PlaybookError` if the source cannot be read or the document
    /// is inconsistent.
    fn load(&self) -> Result<Playbook, PlaybookError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
