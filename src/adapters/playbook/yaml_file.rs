//! File-based playbook source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::playbook::{Playbook, PlaybookError};
use crate::ports::PlaybookSource;

/// Reads a playbook YAML document from disk.
#[derive(Debug, Clone)]
pub struct YamlFilePlaybookSource {
    path: PathBuf,
}

impl YamlFilePlaybookSource {
    /// # Example
    /// ```ignore
    /// let source = YamlFilePlaybookSource::new("./playbooks/saas.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlaybookSource for YamlFilePlaybookSource {
    fn load(&self) -> Result<Playbook, PlaybookError> {
        debug!(path = %self.path.display(), "Reading playbook file");
        let yaml = fs::read_to_string(&self.path).map_err(|e| PlaybookError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Playbook::from_yaml_str(&yaml)
    }

    fn describe(&self) -> String {
        format!("playbook file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "phases:\n  - id: opening\n    title: Opening\n    successors: [closing]\n  - id: closing\n    title: Closing\n"
        )
        .unwrap();

        let playbook = YamlFilePlaybookSource::new(file.path()).load().unwrap();
        assert_eq!(playbook.catalog().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = YamlFilePlaybookSource::new(&path).load().unwrap_err();
        assert!(matches!(err, PlaybookError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn cyclic_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "phases:\n  - id: opening\n    title: Opening\n    successors: [discovery]\n  - id: discovery\n    title: Discovery\n    successors: [opening]\n"
        )
        .unwrap();

        let err = YamlFilePlaybookSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, PlaybookError::CycleDetected(_)));
    }
}
