//! The quiz state machine.
//!
//! ```text
//! NotStarted --start_game--> Playing(0)
//! Playing(r < 7) --submit_guess--> AwaitingNextRound(r + 1) --next_round--> Playing(r + 1)
//! Playing(7) --submit_guess--> Finished --reset--> NotStarted
//! ```
//!
//! `start_game` is accepted from any phase and always deals a fresh game.

use crate::core::config::{QuizConfig, CHOICE_COUNT};
use crate::core::error::{QuizError, Result, StateViolation};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{GameState, Phase, RoundState};
use crate::core::view::QuizView;

use super::outcome::Outcome;

/// Owns one play-through: the state and the randomness that drives it.
///
/// Generic over the random source so tests can script every shuffle and
/// pick. Cloning an engine clones its RNG too, so the copy replays the
/// same future.
#[derive(Clone, Debug)]
pub struct QuizEngine<R = GameRng> {
    config: QuizConfig,
    state: GameState,
    rng: R,
}

impl QuizEngine<GameRng> {
    /// Engine over the built-in countries with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(QuizConfig::default(), GameRng::new(seed))
    }

    /// Engine over the built-in countries with an OS-seeded RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_parts(QuizConfig::default(), GameRng::from_entropy())
    }
}

impl<R: RandomSource> QuizEngine<R> {
    /// Engine over a custom configuration and random source.
    pub fn with_rng(config: QuizConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    fn from_parts(config: QuizConfig, rng: R) -> Self {
        let state = GameState::new(&config);
        Self { config, state, rng }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn view(&self) -> QuizView {
        QuizView::from_state(&self.state)
    }

    /// Candidates on screen, if a round has been dealt.
    #[must_use]
    pub fn round_state(&self) -> Option<RoundState> {
        self.state.round_state()
    }

    // === Transitions ===

    /// Shuffle the full country list and deal round one.
    pub fn start_game(&mut self) -> Result<RoundState> {
        let remaining = self.config.countries().len();
        if remaining < CHOICE_COUNT {
            log::warn!("Cannot deal: only {} countries configured", remaining);
            return Err(StateViolation::PoolTooSmall { remaining }.into());
        }

        self.state = GameState::new(&self.config);
        self.rng.shuffle(self.state.pool_mut());
        self.state.set_phase(Phase::Playing);
        let round = self.deal()?;
        log::debug!("Game started, target {:?}", round.target().unwrap_or_default());
        Ok(round)
    }

    /// Score a tap on candidate `choice`.
    ///
    /// On a non-final round this advances the round counter and waits for
    /// `next_round`. On the final round it ends the game.
    pub fn submit_guess(&mut self, choice: usize) -> Result<Outcome> {
        if choice >= CHOICE_COUNT {
            log::warn!("Rejected guess: choice {} out of range", choice);
            return Err(QuizError::InvalidChoice { choice });
        }
        self.expect_phase(Phase::Playing, "submit a guess")?;

        let answered_round = self.state.display_round();
        let is_correct = choice == self.state.correct_answer();
        if is_correct {
            self.state.add_point();
        }

        let outcome = if self.state.is_last_round() {
            self.state.set_phase(Phase::Finished);
            Outcome::game_over(self.state.score())
        } else {
            let outcome = if is_correct {
                Outcome::correct(self.state.score())
            } else {
                Outcome::wrong(&self.state.pool()[choice])
            };
            self.state.advance_round();
            self.state.set_phase(Phase::AwaitingNextRound);
            outcome
        };

        log::debug!(
            "Guess {} scored {:?}, score {} after round {}",
            choice,
            outcome.kind,
            self.state.score(),
            answered_round
        );
        self.state.set_outcome(outcome.clone());
        Ok(outcome)
    }

    /// Retire the answered country, reshuffle, and deal the next round.
    ///
    /// Only the answered target leaves the pool, so the other two candidates
    /// may show up again later.
    pub fn next_round(&mut self) -> Result<RoundState> {
        self.expect_phase(Phase::AwaitingNextRound, "deal the next round")?;

        let remaining = self.state.pool().len().saturating_sub(1);
        if remaining < CHOICE_COUNT {
            log::warn!("Pool exhausted: {} countries would remain", remaining);
            return Err(StateViolation::PoolTooSmall { remaining }.into());
        }

        let answered = self.state.correct_answer();
        let retired = self.state.pool_mut().remove(answered);
        log::trace!("Retired {:?}, pool now {:?}", retired, self.state.pool());

        self.rng.shuffle(self.state.pool_mut());
        self.state.clear_outcome();
        self.state.set_phase(Phase::Playing);
        self.deal()
    }

    /// Back to an unshuffled full pool with zero score.
    ///
    /// The next `start_game` shuffles and deals.
    pub fn reset(&mut self) {
        log::debug!("Game reset after round {}", self.state.display_round());
        self.state = GameState::new(&self.config);
    }

    // === Helpers ===

    fn expect_phase(&self, required: Phase, operation: &'static str) -> Result<()> {
        let phase = self.state.phase();
        if phase != required {
            log::warn!("Rejected transition: cannot {} while {}", operation, phase);
            return Err(StateViolation::WrongPhase { operation, phase }.into());
        }
        Ok(())
    }

    /// Pick the correct answer among the first `CHOICE_COUNT` pool entries.
    fn deal(&mut self) -> Result<RoundState> {
        let remaining = self.state.pool().len();
        if remaining < CHOICE_COUNT {
            return Err(StateViolation::PoolTooSmall { remaining }.into());
        }
        let correct = self.rng.pick(CHOICE_COUNT);
        self.state.set_correct_answer(correct);
        self.state
            .round_state()
            .ok_or(QuizError::InvalidState(StateViolation::PoolTooSmall { remaining }))
    }
}
