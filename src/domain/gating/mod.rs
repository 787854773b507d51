//! Phase gate evaluation.
//!
//! Answers the two questions consumers ask of a gate: may this information
//! key be disclosed, and may the conversation leave the current phase.
//! Topology (is the target a declared successor) is not checked here.

mod decision;
mod evaluator;

pub use decision::{GateDenial, ProgressDecision};
pub use evaluator::GateEvaluator;
