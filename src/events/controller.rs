//! Plain callback interface between the renderer and the engine.

use crate::core::{GameRng, QuizView, RandomSource, Result};
use crate::rules::QuizEngine;

use super::event::{QuizEvent, QuizInput};

type Listener = Box<dyn FnMut(&QuizEvent)>;

/// Routes renderer inputs to engine transitions and reports what changed.
///
/// Every call returns a fresh `QuizView`; subscribers additionally receive
/// one event per state change. A rejected input emits nothing.
pub struct QuizController<R = GameRng> {
    engine: QuizEngine<R>,
    listeners: Vec<Listener>,
}

impl<R: RandomSource> QuizController<R> {
    #[must_use]
    pub fn new(engine: QuizEngine<R>) -> Self {
        Self {
            engine,
            listeners: Vec::new(),
        }
    }

    /// Register a callback for every future event.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&QuizEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        self.engine.view()
    }

    /// Deal the first game.
    pub fn start(&mut self) -> Result<QuizView> {
        let round = self.engine.start_game()?;
        self.emit(QuizEvent::RoundStarted(round));
        Ok(self.engine.view())
    }

    /// Apply one input from the renderer.
    pub fn handle(&mut self, input: QuizInput) -> Result<QuizView> {
        match input {
            QuizInput::Tap(choice) => {
                let outcome = self.engine.submit_guess(choice)?;
                if outcome.is_game_over() {
                    self.emit(QuizEvent::GameFinished(outcome));
                } else {
                    self.emit(QuizEvent::Guessed { choice, outcome });
                }
            }
            QuizInput::Continue => {
                let round = self.engine.next_round()?;
                self.emit(QuizEvent::RoundStarted(round));
            }
            QuizInput::Restart => {
                self.engine.reset();
                self.emit(QuizEvent::Reset);
                let round = self.engine.start_game()?;
                self.emit(QuizEvent::RoundStarted(round));
            }
        }
        Ok(self.engine.view())
    }

    fn emit(&mut self, event: QuizEvent) {
        log::trace!("Emitting {:?} to {} listeners", event, self.listeners.len());
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
