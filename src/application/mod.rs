//! Application layer - drives training sessions from console input.
//!
//! The rehearsal driver parses trainee input into commands, executes them
//! against a `TrainingSession` and renders the outcome as text.

pub mod rehearsal;

pub use rehearsal::{CommandOutcome, CommandParseError, Rehearsal, RehearsalCommand, HELP_TEXT};
