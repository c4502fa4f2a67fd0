//! Renderer-facing event interface.
//!
//! The renderer forwards taps and alert buttons as `QuizInput`s and either
//! redraws from the returned `QuizView` or listens for `QuizEvent`s.

pub mod controller;
pub mod event;

pub use controller::QuizController;
pub use event::{QuizEvent, QuizInput};
