//! QuizSession aggregate.
//!
//! Holds all transient state of one quiz attempt. Only the transition
//! function mutates it; everything else reads a snapshot.

use std::fmt;

use super::{Answer, Demographics, InsightRequest, QuizError, QuizStage, INSIGHT_FAILURE_MESSAGE};
use crate::domain::catalog::{Question, Survey};

/// 1-based position of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {} of {}", self.current, self.total)
    }
}

/// Session aggregate for a single respondent.
///
/// # Invariants
///
/// - in `Quiz`, `current_question_index` indexes into the selected survey and
///   `answers.len() == current_question_index`
/// - `selected_survey` and `demographics` are set in every stage from `Quiz` on
/// - `insight` is non-empty only in `Result`, `error_message` only in `Error`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    stage: QuizStage,
    selected_survey: Option<Survey>,
    demographics: Option<Demographics>,
    answers: Vec<Answer>,
    current_question_index: usize,
    insight: String,
    error_message: String,
}

impl QuizSession {
    /// Creates the initial session: `Selection`, nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    pub fn selected_survey(&self) -> Option<&Survey> {
        self.selected_survey.as_ref()
    }

    pub fn demographics(&self) -> Option<&Demographics> {
        self.demographics.as_ref()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// Generated insight; empty until the service succeeds.
    pub fn insight(&self) -> &str {
        &self.insight
    }

    /// User-facing error message; empty unless in `Error`.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// The question awaiting an answer, only while in `Quiz`.
    pub fn current_question(&self) -> Option<&Question> {
        if self.stage != QuizStage::Quiz {
            return None;
        }
        self.selected_survey
            .as_ref()
            .and_then(|s| s.question(self.current_question_index))
    }

    /// Progress indicator, only while in `Quiz`.
    pub fn progress(&self) -> Option<Progress> {
        self.current_question()?;
        let total = self.selected_survey.as_ref()?.question_count();
        Some(Progress {
            current: self.current_question_index + 1,
            total,
        })
    }

    /// Returns the first violated invariant, if any.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        let at_or_after_quiz = matches!(
            self.stage,
            QuizStage::Quiz | QuizStage::Loading | QuizStage::Result | QuizStage::Error
        );
        if at_or_after_quiz && (self.selected_survey.is_none() || self.demographics.is_none()) {
            return Some("survey and demographics must be set from the quiz stage on");
        }
        if self.stage == QuizStage::Quiz {
            if self.current_question().is_none() {
                return Some("current question index out of range");
            }
            if self.answers.len() != self.current_question_index {
                return Some("answer count must equal the current question index");
            }
        }
        if self.stage == QuizStage::Selection && *self != Self::new() {
            return Some("selection stage must hold the initial session");
        }
        if (self.stage == QuizStage::Result) == self.insight.is_empty() {
            return Some("insight must be present exactly in the result stage");
        }
        if (self.stage == QuizStage::Error) == self.error_message.is_empty() {
            return Some("error message must be present exactly in the error stage");
        }
        None
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (driven by the transition function)
    // ─────────────────────────────────────────────────────────────────────────

    pub(super) fn select_survey(&mut self, survey: Survey) {
        self.selected_survey = Some(survey);
        self.stage = QuizStage::Demographics;
    }

    pub(super) fn start_quiz(&mut self, demographics: Demographics) {
        self.demographics = Some(demographics);
        self.current_question_index = 0;
        self.answers.clear();
        self.stage = QuizStage::Quiz;
    }

    /// Appends the answer for the current question.
    ///
    /// Returns the insight request once the last question has been answered.
    ///
    /// # Errors
    ///
    /// - `UnknownOption` if `answer` is not one of the question's options
    pub(super) fn record_answer(
        &mut self,
        answer: String,
    ) -> Result<Option<InsightRequest>, QuizError> {
        let survey = self
            .selected_survey
            .as_ref()
            .ok_or_else(|| QuizError::invalid_transition(self.stage, "answer_submitted"))?;
        let question = survey
            .question(self.current_question_index)
            .ok_or_else(|| QuizError::invalid_transition(self.stage, "answer_submitted"))?;

        if !question.has_option(&answer) {
            return Err(QuizError::UnknownOption {
                question_id: question.id(),
                answer,
            });
        }

        let is_last = self.current_question_index + 1 >= survey.question_count();
        let survey_title = survey.title().to_string();
        self.answers.push(Answer::for_question(question, answer));

        if !is_last {
            self.current_question_index += 1;
            return Ok(None);
        }

        self.stage = QuizStage::Loading;
        Ok(Some(InsightRequest {
            survey_title,
            answers: self.answers.clone(),
            demographics: self.demographics,
        }))
    }

    pub(super) fn complete_insight(&mut self, insight: String) {
        self.insight = insight;
        self.stage = QuizStage::Result;
    }

    pub(super) fn fail_insight(&mut self) {
        self.error_message = INSIGHT_FAILURE_MESSAGE.to_string();
        self.stage = QuizStage::Error;
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }
}
