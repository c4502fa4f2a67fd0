//! Log output of the engine.
//!
//! Lives in its own test binary because the logger is process-global.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use guess_the_flag::{QuizEngine, ROUND_COUNT};

struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Debug {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

/// Test that each scored guess is logged with the round it answered.
#[test]
fn test_guess_log_names_answered_round() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut engine = QuizEngine::new(12);
    engine.start_game().unwrap();
    for round in 0..ROUND_COUNT {
        engine.submit_guess(0).unwrap();
        if round + 1 < ROUND_COUNT {
            engine.next_round().unwrap();
        }
    }

    let lines = CAPTURE.lines.lock().unwrap();
    let guesses: Vec<&String> = lines.iter().filter(|l| l.starts_with("Guess ")).collect();
    assert_eq!(guesses.len(), ROUND_COUNT as usize);
    for (i, line) in guesses.iter().enumerate() {
        let suffix = format!("after round {}", i + 1);
        assert!(line.ends_with(&suffix), "{:?} should end with {:?}", line, suffix);
    }
}
