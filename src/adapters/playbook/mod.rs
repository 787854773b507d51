//! Playbook Source Adapters
//!
//! - **EmbeddedPlaybookSource** - The sales playbook compiled into the crate
//! - **YamlFilePlaybookSource** - A playbook YAML file on disk
//!
//! ```ignore
//! use adapters::playbook::{EmbeddedPlaybookSource, YamlFilePlaybookSource};
//!
//! let playbook = EmbeddedPlaybookSource.load()?;
//! let custom = YamlFilePlaybookSource::new("./playbooks/saas.yaml").load()?;
//! ```

mod embedded;
mod yaml_file;

pub use embedded::EmbeddedPlaybookSource;
pub use yaml_file::YamlFilePlaybookSource;
