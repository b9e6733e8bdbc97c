//! Application layer - drives the quiz.
//!
//! Renders screens from the session, turns user intents into events and
//! executes the effects the domain asks for.

mod quiz_controller;
mod quiz_runner;
mod screen;

pub use quiz_controller::QuizController;
pub use quiz_runner::{QuizRunner, RunnerError};
pub use screen::render;
