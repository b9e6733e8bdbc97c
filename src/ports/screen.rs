//! Screen model - what a frontend is asked to draw.
//!
//! Screens are plain data built from the session; a frontend reads them and
//! answers with a [`UserIntent`](super::UserIntent).

use crate::domain::catalog::Survey;
use crate::domain::foundation::SurveySlug;
use crate::domain::quiz::{Gender, Progress};

/// Summary of a survey shown on the selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyCard {
    pub slug: SurveySlug,
    pub title: String,
    pub description: String,
    pub question_count: usize,
}

impl From<&Survey> for SurveyCard {
    fn from(survey: &Survey) -> Self {
        Self {
            slug: survey.slug().clone(),
            title: survey.title().to_string(),
            description: survey.description().to_string(),
            question_count: survey.question_count(),
        }
    }
}

/// What the user sees for one session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Selection {
        surveys: Vec<SurveyCard>,
    },
    Demographics {
        survey_title: String,
        genders: Vec<Gender>,
    },
    Question {
        survey_title: String,
        progress: Progress,
        prompt: String,
        options: Vec<String>,
    },
    Loading,
    Result {
        insight: String,
    },
    Error {
        message: String,
    },
}

impl Screen {
    /// Whether the screen waits for user input.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Screen::Loading)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Selection { .. } => "selection",
            Screen::Demographics { .. } => "demographics",
            Screen::Question { .. } => "question",
            Screen::Loading => "loading",
            Screen::Result { .. } => "result",
            Screen::Error { .. } => "error",
        }
    }
}
