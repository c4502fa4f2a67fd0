//! Read-only snapshot for the rendering layer.

use serde::{Deserialize, Serialize};

use super::state::{GameState, Phase, RoundState};
use crate::rules::Outcome;

/// Everything a renderer needs to draw one frame.
///
/// Presentation state (rotations, fades, highlights) is not here; derive it
/// from `outcome.kind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizView {
    /// Candidates on screen, `None` before the first deal.
    pub round: Option<RoundState>,
    pub score: u32,
    /// One-based round number.
    pub display_round: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

impl QuizView {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            round: state.round_state(),
            score: state.score(),
            display_round: state.display_round(),
            phase: state.phase(),
            outcome: state.outcome().cloned(),
        }
    }

    /// Name shown under "Tap the flag of".
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.round.as_ref().and_then(RoundState::target)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
