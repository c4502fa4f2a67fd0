//! Quiz configuration.
//!
//! The round count and the number of flags per round are fixed. The only
//! thing a game can configure is the list of countries it draws from.

use serde::{Deserialize, Serialize};

use super::error::{QuizError, Result};

/// Rounds in one play-through.
pub const ROUND_COUNT: u32 = 8;

/// Flags offered per round.
pub const CHOICE_COUNT: usize = 3;

/// Smallest pool that survives a full game.
///
/// Each non-final round consumes one country, and the last round still
/// needs `CHOICE_COUNT` candidates.
pub const MIN_POOL_SIZE: usize = CHOICE_COUNT + ROUND_COUNT as usize - 1;

/// Built-in country list, in its canonical order.
pub const DEFAULT_COUNTRIES: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK",
    "Ukraine", "US",
];

/// Country list a game is played with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    countries: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            countries: DEFAULT_COUNTRIES.iter().map(|&c| c.to_string()).collect(),
        }
    }
}

impl QuizConfig {
    /// Configuration with the built-in 11 countries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a custom country list.
    ///
    /// Fails if the list has duplicates or is too short to last a game.
    pub fn with_countries<I, S>(countries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = Self {
            countries: countries.into_iter().map(Into::into).collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the pool can never run dry mid-game.
    pub fn validate(&self) -> Result<()> {
        if self.countries.len() < MIN_POOL_SIZE {
            return Err(QuizError::InvalidConfig(format!(
                "{} countries configured, at least {} required",
                self.countries.len(),
                MIN_POOL_SIZE
            )));
        }

        for (i, name) in self.countries.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(QuizError::InvalidConfig(format!("country {} has an empty name", i)));
            }
            if self.countries[..i].contains(name) {
                return Err(QuizError::InvalidConfig(format!("duplicate country {:?}", name)));
            }
        }

        Ok(())
    }

    /// Countries in configured order.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }
}
