//! Quiz domain module.
//!
//! The session state machine: selection -> demographics -> quiz -> loading ->
//! result | error, with reset back to selection. All state changes go through
//! the pure [`transition`] function; side effects come back as [`Effect`]s.

mod answer;
mod demographics;
mod errors;
mod event;
mod session;
mod stage;
mod transition;

pub use answer::Answer;
pub use demographics::{Demographics, Gender};
pub use errors::{QuizError, INSIGHT_FAILURE_MESSAGE};
pub use event::{Effect, InsightRequest, QuizEvent};
pub use session::{Progress, QuizSession};
pub use stage::QuizStage;
pub use transition::{transition, Transition};
