//! Trust domain module.
//!
//! Bounded trust level, the evidence ring buffer explaining its changes,
//! and the ledger that applies classified utterances to both.

mod evidence;
mod ledger;
mod level;

pub use evidence::{EvidenceEntry, EvidenceLog, EVIDENCE_CAPACITY};
pub use ledger::{TrustDelta, TrustLedger};
pub use level::{PersonaStance, TrustLevel};
