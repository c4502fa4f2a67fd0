//! Game rules: the quiz state machine and how guesses are scored.
//!
//! `QuizEngine` is the only place state changes. `Outcome` and `Tier`
//! describe what a guess did and carry the player-facing messages.

pub mod engine;
pub mod outcome;

pub use engine::QuizEngine;
pub use outcome::{Outcome, OutcomeKind, Tier};
