//! Property tests for the quiz state machine.

use proptest::prelude::*;

use guess_the_flag::{OutcomeKind, Phase, QuizEngine, Tier, CHOICE_COUNT, ROUND_COUNT};

proptest! {
    /// Test that score rises only on correct guesses, round stays in bounds,
    /// and eight guesses always finish the game.
    #[test]
    fn prop_guesses_drive_score_and_round(
        seed in any::<u64>(),
        choices in prop::collection::vec(0usize..CHOICE_COUNT, ROUND_COUNT as usize),
    ) {
        let mut engine = QuizEngine::new(seed);
        engine.start_game().unwrap();

        let mut last_round = 0;
        for (i, &choice) in choices.iter().enumerate() {
            let state = engine.state();
            prop_assert_eq!(state.phase(), Phase::Playing);
            prop_assert!(state.correct_answer() < CHOICE_COUNT);
            prop_assert!(state.round() < ROUND_COUNT);
            prop_assert!(state.round() >= last_round);
            last_round = state.round();

            let score_before = state.score();
            let correct = choice == state.correct_answer();

            let outcome = engine.submit_guess(choice).unwrap();
            let score_after = engine.state().score();
            prop_assert_eq!(score_after, score_before + u32::from(correct));

            if i + 1 < choices.len() {
                let expected = if correct { OutcomeKind::Correct } else { OutcomeKind::Wrong };
                prop_assert_eq!(outcome.kind, expected);
                engine.next_round().unwrap();
                prop_assert!(engine.state().pool().len() >= CHOICE_COUNT);
            } else {
                prop_assert_eq!(outcome.kind, OutcomeKind::GameOver);
                prop_assert_eq!(outcome.tier, Some(Tier::from_score(score_after)));
            }
        }

        prop_assert!(engine.state().is_finished());
        prop_assert_eq!(engine.state().round(), ROUND_COUNT - 1);
        prop_assert!(engine.state().pool().len() > CHOICE_COUNT);
    }

    /// Test that the final tier depends only on the number of correct answers.
    #[test]
    fn prop_tier_follows_correct_count(
        seed in any::<u64>(),
        pattern in prop::collection::vec(any::<bool>(), ROUND_COUNT as usize),
    ) {
        let mut engine = QuizEngine::new(seed);
        engine.start_game().unwrap();

        for (i, &hit) in pattern.iter().enumerate() {
            let answer = engine.state().correct_answer();
            let choice = if hit { answer } else { (answer + 2) % CHOICE_COUNT };
            engine.submit_guess(choice).unwrap();
            if i + 1 < pattern.len() {
                engine.next_round().unwrap();
            }
        }

        let hits = pattern.iter().filter(|&&h| h).count() as u32;
        prop_assert_eq!(engine.state().score(), hits);
        let outcome = engine.state().outcome().unwrap();
        prop_assert_eq!(outcome.tier, Some(Tier::from_score(hits)));
    }

    /// Test that out-of-range taps are rejected without touching state.
    #[test]
    fn prop_invalid_choice_is_inert(seed in any::<u64>(), choice in CHOICE_COUNT..usize::MAX) {
        let mut engine = QuizEngine::new(seed);
        engine.start_game().unwrap();
        let before = engine.state().clone();

        prop_assert!(engine.submit_guess(choice).is_err());
        prop_assert_eq!(engine.state(), &before);
    }
}
