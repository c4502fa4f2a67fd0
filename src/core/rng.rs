//! Injectable randomness for pool shuffles and answer selection.
//!
//! The engine only ever asks for two things: a uniform permutation of the
//! pool, and a uniform index below some bound. `RandomSource` captures that,
//! so tests can replace it with a scripted source, and `GameRng` is the
//! seeded implementation used in play.
//!
//! ```
//! use guess_the_flag::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.pick(3), b.pick(3));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the engine's random decisions.
pub trait RandomSource {
    /// Permute `items` uniformly in place.
    fn shuffle(&mut self, items: &mut [String]);

    /// Uniform index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Deterministic RNG backed by ChaCha8.
///
/// Same seed produces the same sequence of shuffles and picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the OS.
    ///
    /// The chosen seed is still recorded, so a game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn shuffle(&mut self, items: &mut [String]) {
        items.shuffle(&mut self.inner);
    }

    fn pick(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how much randomness has been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
