//! Frontend that replays a fixed list of intents.

use std::collections::VecDeque;

use crate::ports::{FrontendError, QuizFrontend, Screen, UserIntent};

/// Replays queued intents and records every screen it was given.
///
/// Returns `Quit` once the queue is empty.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    intents: VecDeque<UserIntent>,
    screens: Vec<Screen>,
}

impl ScriptedFrontend {
    pub fn new(intents: impl IntoIterator<Item = UserIntent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
            screens: Vec::new(),
        }
    }

    /// Screens in the order they were prompted or shown.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Intents not yet replayed.
    pub fn remaining(&self) -> usize {
        self.intents.len()
    }
}

impl QuizFrontend for ScriptedFrontend {
    fn prompt(&mut self, screen: &Screen) -> Result<UserIntent, FrontendError> {
        if !screen.is_interactive() {
            return Err(FrontendError::NotInteractive(screen.name()));
        }
        self.screens.push(screen.clone());
        Ok(self.intents.pop_front().unwrap_or(UserIntent::Quit))
    }

    fn show(&mut self, screen: &Screen) {
        self.screens.push(screen.clone());
    }
}
