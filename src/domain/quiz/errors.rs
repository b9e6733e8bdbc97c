//! Quiz-specific error types.

use thiserror::Error;

use super::QuizStage;
use crate::domain::foundation::{ErrorCode, QuestionId, SurveySlug, ValidationError};

/// Message shown to the respondent whenever insight generation fails.
pub const INSIGHT_FAILURE_MESSAGE: &str =
    "Failed to generate your personality insight. Please try again later.";

/// Errors returned when an event or intent cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The event is not accepted in the current stage.
    #[error("cannot apply '{event}' while in the {stage} stage")]
    InvalidTransition {
        stage: QuizStage,
        event: &'static str,
    },

    /// The submitted answer is not one of the question's options.
    #[error("'{answer}' is not an option for question {question_id}")]
    UnknownOption {
        question_id: QuestionId,
        answer: String,
    },

    /// No survey with this slug exists in the catalog.
    #[error("survey '{0}' not found")]
    SurveyNotFound(SurveySlug),

    /// The selected survey breaks a catalog invariant.
    #[error("survey '{slug}' cannot be taken: {reason}")]
    InvalidSurvey { slug: SurveySlug, reason: String },

    /// A state change failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl QuizError {
    pub fn invalid_transition(stage: QuizStage, event: &'static str) -> Self {
        QuizError::InvalidTransition { stage, event }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            QuizError::UnknownOption { .. } => ErrorCode::UnknownOption,
            QuizError::SurveyNotFound(_) => ErrorCode::SurveyNotFound,
            QuizError::InvalidSurvey { .. } => ErrorCode::ValidationFailed,
            QuizError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
