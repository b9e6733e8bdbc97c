//! QuizRunner - the render / intent loop.

use super::QuizController;
use crate::ports::{FrontendError, QuizFrontend, UserIntent};

/// Errors that end a run early.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Frontend(#[from] FrontendError),
}

/// Connects a controller to a frontend until the user quits.
pub struct QuizRunner<F> {
    controller: QuizController,
    frontend: F,
}

impl<F: QuizFrontend> QuizRunner<F> {
    pub fn new(controller: QuizController, frontend: F) -> Self {
        Self {
            controller,
            frontend,
        }
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Renders, prompts and applies intents until `Quit`.
    ///
    /// Rejected intents are logged and the same screen is shown again. While
    /// an insight is being generated the loading screen is shown and no input
    /// is read.
    ///
    /// # Errors
    ///
    /// `RunnerError::Frontend` if the terminal fails.
    pub async fn run(&mut self) -> Result<(), RunnerError> {
        tracing::info!(surveys = self.controller.catalog().len(), "quiz started");

        loop {
            let screen = self.controller.screen();
            let intent = self.frontend.prompt(&screen)?;

            if intent == UserIntent::Quit {
                tracing::info!(stage = %self.controller.session().stage(), "quiz ended by user");
                return Ok(());
            }

            match self.controller.submit(intent) {
                Ok(effects) => {
                    if effects.is_empty() {
                        continue;
                    }
                    self.frontend.show(&self.controller.screen());
                    self.controller.settle(effects).await;
                }
                Err(err) => {
                    tracing::warn!(code = %err.code(), error = %err, "intent rejected");
                }
            }
        }
    }

    pub fn into_parts(self) -> (QuizController, F) {
        (self.controller, self.frontend)
    }
}
