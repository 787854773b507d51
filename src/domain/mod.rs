//! Domain layer containing the dialogue-gating engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `trigger` - Behavioral trigger vocabulary and the utterance classifier
//! - `trust` - Bounded trust level, evidence log and trust ledger
//! - `playbook` - Validated phase catalog, gate table and trust seeds
//! - `gating` - Disclosure and progression decisions against the gate table
//! - `session` - Training session state machine composing the above

pub mod foundation;
pub mod gating;
pub mod playbook;
pub mod session;
pub mod trigger;
pub mod trust;
