//! Catalog-specific error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{QuestionId, SurveySlug};

/// Errors raised while building or loading a survey catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no surveys")]
    Empty,

    #[error("duplicate survey slug '{0}'")]
    DuplicateSlug(SurveySlug),

    #[error("survey '{slug}' is invalid: {reason}")]
    InvalidSurvey { slug: SurveySlug, reason: String },

    #[error("survey '{slug}' question {question_id} is invalid: {reason}")]
    InvalidQuestion {
        slug: SurveySlug,
        question_id: QuestionId,
        reason: String,
    },

    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl CatalogError {
    pub(crate) fn invalid_survey(slug: &SurveySlug, reason: impl Into<String>) -> Self {
        CatalogError::InvalidSurvey {
            slug: slug.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_question(
        slug: &SurveySlug,
        question_id: QuestionId,
        reason: impl Into<String>,
    ) -> Self {
        CatalogError::InvalidQuestion {
            slug: slug.clone(),
            question_id,
            reason: reason.into(),
        }
    }
}
