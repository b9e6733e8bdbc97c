//! Survey aggregate of the static catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{CatalogError, Question};
use crate::domain::foundation::SurveySlug;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// A named, ordered set of questions.
///
/// # Invariants
///
/// - `title` is non-empty
/// - at least one question
/// - question ids are unique within the survey
/// - every question has non-empty text and at least [`MIN_OPTIONS`] distinct,
///   non-empty options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    slug: SurveySlug,
    title: String,
    #[serde(default)]
    description: String,
    questions: Vec<Question>,
}

impl Survey {
    /// Creates a validated survey.
    pub fn new(
        slug: SurveySlug,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        let survey = Self::from_parts(slug, title, description, questions);
        survey.validate()?;
        Ok(survey)
    }

    /// Builds a survey without validation; callers vouch for the invariants.
    pub(super) fn from_parts(
        slug: SurveySlug,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            slug,
            title: title.into(),
            description: description.into(),
            questions,
        }
    }

    pub fn slug(&self) -> &SurveySlug {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question at a 0-based position.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Checks the survey invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::invalid_survey(&self.slug, "title cannot be empty"));
        }
        if self.questions.is_empty() {
            return Err(CatalogError::invalid_survey(
                &self.slug,
                "survey must contain at least one question",
            ));
        }

        let mut seen_ids = HashSet::new();
        for question in &self.questions {
            if !seen_ids.insert(question.id()) {
                return Err(CatalogError::invalid_question(
                    &self.slug,
                    question.id(),
                    "duplicate question id",
                ));
            }
            if question.text().trim().is_empty() {
                return Err(CatalogError::invalid_question(
                    &self.slug,
                    question.id(),
                    "text cannot be empty",
                ));
            }
            if question.options().len() < MIN_OPTIONS {
                return Err(CatalogError::invalid_question(
                    &self.slug,
                    question.id(),
                    format!("at least {} options are required", MIN_OPTIONS),
                ));
            }
            let mut seen_options = HashSet::new();
            for option in question.options() {
                if option.trim().is_empty() {
                    return Err(CatalogError::invalid_question(
                        &self.slug,
                        question.id(),
                        "options cannot be empty",
                    ));
                }
                if !seen_options.insert(option.as_str()) {
                    return Err(CatalogError::invalid_question(
                        &self.slug,
                        question.id(),
                        format!("duplicate option '{}'", option),
                    ));
                }
            }
        }
        Ok(())
    }
}
