//! Game state: pool, score, round counter and phase.
//!
//! ## GameState
//!
//! Everything one play-through needs:
//! - The working country pool (first `CHOICE_COUNT` entries are on screen)
//! - Which of those is the correct answer
//! - Score and zero-based round counter
//! - The outcome of the latest guess, for display
//!
//! ## RoundState
//!
//! An owned snapshot of the three candidates and the correct index, handed
//! to the renderer at the start of every round.

use serde::{Deserialize, Serialize};

use super::config::{QuizConfig, CHOICE_COUNT, ROUND_COUNT};
use crate::rules::Outcome;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pool loaded but not shuffled; no round on screen.
    #[default]
    NotStarted,
    /// A round is on screen, waiting for a tap.
    Playing,
    /// A non-final guess was scored; waiting for "continue".
    AwaitingNextRound,
    /// The last round was answered.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Playing => "playing",
            Phase::AwaitingNextRound => "awaiting the next round",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// The candidates of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Country names in on-screen order.
    pub candidates: [String; CHOICE_COUNT],
    /// Index into `candidates` of the country to find.
    pub correct_answer: usize,
}

impl RoundState {
    /// Name the player is asked to find.
    ///
    /// `None` if `correct_answer` does not index a candidate, which only
    /// happens for a hand-built or deserialized round.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.candidates.get(self.correct_answer).map(String::as_str)
    }

    /// Check a choice against the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

/// Complete state of one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pool: Vec<String>,
    correct_answer: usize,
    score: u32,
    round: u32,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Fresh state holding the configured countries in configured order.
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            pool: config.countries().to_vec(),
            correct_answer: 0,
            score: 0,
            round: 0,
            phase: Phase::NotStarted,
            outcome: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based round counter.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// One-based round number as shown to the player.
    #[must_use]
    pub fn display_round(&self) -> u32 {
        self.round + 1
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Is the current round the final one?
    #[must_use]
    pub fn is_last_round(&self) -> bool {
        self.round + 1 == ROUND_COUNT
    }

    /// Outcome of the most recent guess.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Candidates currently on screen.
    ///
    /// `None` before the first round is dealt, or if the pool is too small.
    #[must_use]
    pub fn round_state(&self) -> Option<RoundState> {
        if self.phase == Phase::NotStarted || self.pool.len() < CHOICE_COUNT {
            return None;
        }
        Some(RoundState {
            candidates: [
                self.pool[0].clone(),
                self.pool[1].clone(),
                self.pool[2].clone(),
            ],
            correct_answer: self.correct_answer,
        })
    }

    // === Mutation (engine only) ===

    pub(crate) fn pool_mut(&mut self) -> &mut Vec<String> {
        &mut self.pool
    }

    pub(crate) fn set_correct_answer(&mut self, index: usize) {
        debug_assert!(index < CHOICE_COUNT);
        self.correct_answer = index;
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn advance_round(&mut self) {
        debug_assert!(self.round + 1 < ROUND_COUNT);
        self.round += 1;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    pub(crate) fn clear_outcome(&mut self) {
        self.outcome = None;
    }
}
