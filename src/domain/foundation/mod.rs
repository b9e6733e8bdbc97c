//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the quiz domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{QuestionId, SurveySlug};
pub use state_machine::StateMachine;
