//! Core quiz types: configuration, errors, RNG, state and the render view.
//!
//! Nothing here enforces the game rules; that is `rules::QuizEngine`'s job.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod view;

pub use config::{QuizConfig, CHOICE_COUNT, DEFAULT_COUNTRIES, MIN_POOL_SIZE, ROUND_COUNT};
pub use error::{QuizError, Result, StateViolation};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{GameState, Phase, RoundState};
pub use view::QuizView;
