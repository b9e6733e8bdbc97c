//! Pure view renderer.
//!
//! `render` maps a session snapshot to exactly one screen. Frontends draw
//! screens; they never look at the session directly.

use crate::domain::catalog::SurveyCatalog;
use crate::domain::quiz::{Gender, QuizSession, QuizStage};
use crate::ports::{Screen, SurveyCard};

/// Renders the screen for `session`. Reads only; never mutates.
pub fn render(session: &QuizSession, catalog: &SurveyCatalog) -> Screen {
    let survey_title = || {
        session
            .selected_survey()
            .map(|s| s.title().to_string())
            .unwrap_or_default()
    };

    match session.stage() {
        QuizStage::Selection => Screen::Selection {
            surveys: catalog.surveys().iter().map(SurveyCard::from).collect(),
        },
        QuizStage::Demographics => Screen::Demographics {
            survey_title: survey_title(),
            genders: Gender::ALL.to_vec(),
        },
        QuizStage::Quiz => match (session.current_question(), session.progress()) {
            (Some(question), Some(progress)) => Screen::Question {
                survey_title: survey_title(),
                progress,
                prompt: question.text().to_string(),
                options: question.options().to_vec(),
            },
            _ => Screen::Error {
                message: "The current question could not be found.".to_string(),
            },
        },
        QuizStage::Loading => Screen::Loading,
        QuizStage::Result => Screen::Result {
            insight: session.insight().to_string(),
        },
        QuizStage::Error => Screen::Error {
            message: session.error_message().to_string(),
        },
    }
}
