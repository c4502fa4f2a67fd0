//! Error types for quiz transitions.
//!
//! Every error here is a caller bug: the three-button UI cannot produce an
//! out-of-range tap, and a well-behaved renderer never continues a finished
//! game. Transitions that fail leave the engine state untouched.

use thiserror::Error;

use super::config::CHOICE_COUNT;
use super::state::Phase;

/// A transition was attempted from a state that does not allow it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateViolation {
    #[error("cannot {operation} while the game is {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },
    #[error("pool would hold {remaining} countries, a round needs {}", CHOICE_COUNT)]
    PoolTooSmall { remaining: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("choice {choice} is outside 0..{}", CHOICE_COUNT)]
    InvalidChoice { choice: usize },
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateViolation),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, QuizError>;
