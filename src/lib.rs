//! Rapport Engine - dialogue gating for sales-conversation rehearsal
//!
//! This crate implements the engine behind a simulated prospect: a bounded
//! trust ledger, a lexical trigger classifier, per-phase disclosure and
//! progression gates, and a session orchestrator that ties them together.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
