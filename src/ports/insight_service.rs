//! Insight Service Port - contract for turning answers into an insight.
//!
//! The quiz only knows this contract. Whether the text comes from an LLM or a
//! canned string is decided by the adapter wired in at start-up.

use async_trait::async_trait;

use crate::domain::quiz::{Answer, Demographics};

/// Generates a personality insight from a completed quiz.
#[async_trait]
pub trait InsightService: Send + Sync {
    /// Summarises `answers` in the context of `survey_title` and, when given,
    /// the respondent's demographics.
    ///
    /// Returns non-empty natural-language text.
    ///
    /// # Errors
    ///
    /// `ServiceFailure` for any network, authentication or upstream error.
    async fn generate_insight(
        &self,
        answers: &[Answer],
        survey_title: &str,
        demographics: Option<&Demographics>,
    ) -> Result<String, InsightError>;
}

/// Insight generation failure. Callers treat every cause the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsightError {
    #[error("insight service failure: {0}")]
    ServiceFailure(String),
}

impl InsightError {
    pub fn service_failure(reason: impl Into<String>) -> Self {
        InsightError::ServiceFailure(reason.into())
    }
}

impl From<crate::ports::AIError> for InsightError {
    fn from(err: crate::ports::AIError) -> Self {
        InsightError::ServiceFailure(err.to_string())
    }
}
