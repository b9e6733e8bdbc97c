//! QuizStage enum tracking where the respondent is in the flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Stage of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizStage {
    /// Choosing a survey from the catalog.
    #[default]
    Selection,
    /// Filling in the demographics form.
    Demographics,
    /// Answering questions one at a time.
    Quiz,
    /// Waiting for the insight service.
    Loading,
    /// Showing the generated insight.
    Result,
    /// Showing the fixed failure message.
    Error,
}

impl QuizStage {
    /// All stages in flow order.
    pub const ALL: [QuizStage; 6] = [
        QuizStage::Selection,
        QuizStage::Demographics,
        QuizStage::Quiz,
        QuizStage::Loading,
        QuizStage::Result,
        QuizStage::Error,
    ];

    /// Returns true if a reset request is accepted in this stage.
    pub fn accepts_reset(&self) -> bool {
        !matches!(self, QuizStage::Loading)
    }
}

impl StateMachine for QuizStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizStage::*;
        match self {
            // Reset while selecting is a no-op back to the initial session.
            Selection => vec![Selection, Demographics],
            Demographics => vec![Quiz, Selection],
            Quiz => vec![Quiz, Loading, Selection],
            Loading => vec![Result, Error],
            Result => vec![Selection],
            Error => vec![Selection],
        }
    }
}

impl fmt::Display for QuizStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizStage::Selection => "selection",
            QuizStage::Demographics => "demographics",
            QuizStage::Quiz => "quiz",
            QuizStage::Loading => "loading",
            QuizStage::Result => "result",
            QuizStage::Error => "error",
        };
        write!(f, "{}", s)
    }
}
