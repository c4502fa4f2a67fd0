//! Inputs from the renderer and events sent back to it.

use serde::{Deserialize, Serialize};

use crate::core::RoundState;
use crate::rules::Outcome;

/// Something the player did on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizInput {
    /// The flag at this on-screen index was tapped.
    Tap(usize),
    /// "Continue" on the end-of-round alert.
    Continue,
    /// "Restart" on the end-of-game alert.
    Restart,
}

/// A state change the renderer may want to react to.
///
/// `Guessed` drives the per-flag animations: spin the correct flag on
/// `Correct`, highlight the tapped one on `Wrong`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    /// A new round was dealt.
    RoundStarted(RoundState),
    /// A non-final guess was scored.
    Guessed { choice: usize, outcome: Outcome },
    /// The final guess was scored.
    GameFinished(Outcome),
    /// Score and pool were cleared ahead of a new game.
    Reset,
}
