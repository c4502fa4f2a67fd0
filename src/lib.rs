//! # guess-the-flag
//!
//! Game-state engine for a flag quiz: three flags per round, tap the one
//! matching the named country, eight rounds per game.
//!
//! ## Design Principles
//!
//! 1. **No UI state**: The engine knows nothing about flags, animations or
//!    alerts. Renderers read a `QuizView` and forward taps.
//!
//! 2. **Explicit transitions**: Every change goes through `QuizEngine` and
//!    returns either the new state or a `QuizError`. Rejected calls leave
//!    state untouched.
//!
//! 3. **Injectable randomness**: Shuffles and picks go through
//!    `RandomSource`, so a fixed seed or a scripted source makes a game fully
//!    reproducible.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, state, render view
//! - `rules`: The quiz state machine, outcomes and tiers
//! - `events`: Input routing and event callbacks for renderers

pub mod core;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, GameState, Phase, QuizConfig, QuizError, QuizView, RandomSource,
    Result, RoundState, StateViolation, CHOICE_COUNT, ROUND_COUNT,
};

pub use crate::rules::{Outcome, OutcomeKind, QuizEngine, Tier};

pub use crate::events::{QuizController, QuizEvent, QuizInput};
