//! Quiz Frontend Port - where user intents come from.
//!
//! A frontend displays a [`Screen`] and reports what the user chose. It never
//! touches the session; the controller turns intents into events.

use super::Screen;
use crate::domain::foundation::SurveySlug;
use crate::domain::quiz::Demographics;

/// Something the user asked for on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Picked a survey card on the selection screen.
    SelectSurvey(SurveySlug),
    /// Completed the demographics form.
    SubmitDemographics(Demographics),
    /// Picked an option on the current question.
    Answer(String),
    /// Back to the selection screen.
    Reset,
    /// Leave the application.
    Quit,
}

/// Interactive surface the quiz is played on.
pub trait QuizFrontend: Send {
    /// Displays an interactive screen and waits for the user's choice.
    ///
    /// # Errors
    ///
    /// Returns `FrontendError` if the terminal cannot be read or written.
    fn prompt(&mut self, screen: &Screen) -> Result<UserIntent, FrontendError>;

    /// Displays a passive screen that takes no input (loading).
    fn show(&mut self, screen: &Screen);
}

/// Frontend I/O failures.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// The screen has nothing the user can choose.
    #[error("screen is not interactive: {0}")]
    NotInteractive(&'static str),

    /// Terminal I/O failed while prompting.
    #[error("terminal prompt failed: {0}")]
    Terminal(String),
}
