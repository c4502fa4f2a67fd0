//! Guess outcomes and end-of-game tiers.

use serde::{Deserialize, Serialize};

use crate::core::config::ROUND_COUNT;

/// What a guess did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Correct,
    Wrong,
    /// The final round was answered, whether correctly or not.
    GameOver,
}

/// End-of-game bucket derived from the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Every round answered correctly.
    Perfect,
    /// Six or seven out of eight.
    Close,
    /// Five or fewer.
    TryAgain,
}

impl Tier {
    /// Classify a final score out of `ROUND_COUNT`.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score == ROUND_COUNT {
            Tier::Perfect
        } else if score > 5 {
            Tier::Close
        } else {
            Tier::TryAgain
        }
    }

    /// Alert title for this tier.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tier::Perfect => "Winner!",
            Tier::Close => "So close!",
            Tier::TryAgain => "Better luck next time",
        }
    }

    /// Alert message for this tier at the given score.
    #[must_use]
    pub fn message(self, score: u32) -> String {
        match self {
            Tier::Perfect => "Perfect Score!".to_string(),
            Tier::Close => format!("Your score is {} out of {}", score, ROUND_COUNT),
            Tier::TryAgain => format!(
                "Your score is {} out of {}, practice makes perfect try again!",
                score, ROUND_COUNT
            ),
        }
    }
}

/// Result of one guess, ready to show in an alert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Set only when `kind` is `GameOver`.
    pub tier: Option<Tier>,
    pub title: String,
    pub message: String,
}

impl Outcome {
    /// Outcome of a correct, non-final guess.
    #[must_use]
    pub fn correct(score: u32) -> Self {
        Self {
            kind: OutcomeKind::Correct,
            tier: None,
            title: "Correct".to_string(),
            message: format!("Your score is {}", score),
        }
    }

    /// Outcome of a wrong, non-final guess. `picked` is the tapped country.
    #[must_use]
    pub fn wrong(picked: &str) -> Self {
        Self {
            kind: OutcomeKind::Wrong,
            tier: None,
            title: "Wrong!".to_string(),
            message: format!("That's the flag of {}", picked),
        }
    }

    /// Outcome of the final guess.
    #[must_use]
    pub fn game_over(final_score: u32) -> Self {
        let tier = Tier::from_score(final_score);
        Self {
            kind: OutcomeKind::GameOver,
            tier: Some(tier),
            title: tier.title().to_string(),
            message: tier.message(final_score),
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.kind == OutcomeKind::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_table() {
        let expected = [
            (0, Tier::TryAgain),
            (1, Tier::TryAgain),
            (2, Tier::TryAgain),
            (3, Tier::TryAgain),
            (4, Tier::TryAgain),
            (5, Tier::TryAgain),
            (6, Tier::Close),
            (7, Tier::Close),
            (8, Tier::Perfect),
        ];
        for (score, tier) in expected {
            assert_eq!(Tier::from_score(score), tier, "score {}", score);
        }
    }

    #[test]
    fn test_game_over_messages() {
        let perfect = Outcome::game_over(8);
        assert_eq!(perfect.tier, Some(Tier::Perfect));
        assert_eq!(perfect.title, "Winner!");
        assert_eq!(perfect.message, "Perfect Score!");

        let close = Outcome::game_over(7);
        assert_eq!(close.tier, Some(Tier::Close));
        assert_eq!(close.title, "So close!");
        assert_eq!(close.message, "Your score is 7 out of 8");

        let low = Outcome::game_over(5);
        assert_eq!(low.tier, Some(Tier::TryAgain));
        assert_eq!(low.title, "Better luck next time");
        assert_eq!(
            low.message,
            "Your score is 5 out of 8, practice makes perfect try again!"
        );
        assert!(low.is_game_over());
    }

    #[test]
    fn test_round_messages() {
        let correct = Outcome::correct(3);
        assert_eq!(correct.kind, OutcomeKind::Correct);
        assert_eq!(correct.title, "Correct");
        assert_eq!(correct.message, "Your score is 3");
        assert_eq!(correct.tier, None);

        let wrong = Outcome::wrong("Nigeria");
        assert_eq!(wrong.kind, OutcomeKind::Wrong);
        assert_eq!(wrong.title, "Wrong!");
        assert_eq!(wrong.message, "That's the flag of Nigeria");
        assert!(!wrong.is_game_over());
    }
}
