//! Events fed into the transition function and effects it requests.

use super::{Answer, Demographics};
use crate::domain::catalog::Survey;

/// Something that happened, from the respondent or from the insight service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    SurveySelected(Survey),
    DemographicsSubmitted(Demographics),
    AnswerSubmitted(String),
    InsightGenerated(String),
    /// Carries the failure detail for logging; it is never shown.
    InsightFailed(String),
    ResetRequested,
}

impl QuizEvent {
    /// Stable name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::SurveySelected(_) => "survey_selected",
            QuizEvent::DemographicsSubmitted(_) => "demographics_submitted",
            QuizEvent::AnswerSubmitted(_) => "answer_submitted",
            QuizEvent::InsightGenerated(_) => "insight_generated",
            QuizEvent::InsightFailed(_) => "insight_failed",
            QuizEvent::ResetRequested => "reset_requested",
        }
    }
}

/// Input for one insight service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRequest {
    pub survey_title: String,
    pub answers: Vec<Answer>,
    pub demographics: Option<Demographics>,
}

/// Side effect requested by a transition; executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the insight service and feed its outcome back as an event.
    GenerateInsight(InsightRequest),
    /// Record why insight generation failed.
    LogInsightFailure { reason: String },
}
