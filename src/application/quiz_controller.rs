//! QuizController - owns the session and executes transition effects.

use std::collections::VecDeque;
use std::sync::Arc;

use super::screen::render;
use crate::domain::catalog::SurveyCatalog;
use crate::domain::quiz::{transition, Effect, QuizError, QuizEvent, QuizSession};
use crate::ports::{InsightService, Screen, UserIntent};

/// Drives one quiz session.
///
/// Intents become events, events go through the pure transition function,
/// and the returned effects are executed here. Service outcomes are fed back
/// in as events, so every session change goes through `transition`.
pub struct QuizController {
    catalog: Arc<SurveyCatalog>,
    insight_service: Arc<dyn InsightService>,
    session: QuizSession,
}

impl QuizController {
    pub fn new(catalog: Arc<SurveyCatalog>, insight_service: Arc<dyn InsightService>) -> Self {
        Self {
            catalog,
            insight_service,
            session: QuizSession::new(),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn catalog(&self) -> &SurveyCatalog {
        &self.catalog
    }

    /// Screen for the current session.
    pub fn screen(&self) -> Screen {
        render(&self.session, &self.catalog)
    }

    /// Applies one event. On error the session is unchanged.
    ///
    /// # Errors
    ///
    /// Whatever `transition` rejects the event with.
    pub fn apply(&mut self, event: QuizEvent) -> Result<Vec<Effect>, QuizError> {
        let from = self.session.stage();
        let event_name = event.name();
        let next = transition(&self.session, event)?;
        self.session = next.session;

        tracing::debug!(
            event = event_name,
            from = %from,
            to = %self.session.stage(),
            effects = next.effects.len(),
            "quiz transition"
        );

        Ok(next.effects)
    }

    /// Turns a user intent into an event and applies it. `Quit` is not a
    /// session change and yields no effects.
    ///
    /// # Errors
    ///
    /// - `SurveyNotFound` if the selected slug is not in the catalog
    /// - any error from [`QuizController::apply`]
    pub fn submit(&mut self, intent: UserIntent) -> Result<Vec<Effect>, QuizError> {
        let event = match intent {
            UserIntent::SelectSurvey(slug) => {
                let survey = self
                    .catalog
                    .find(&slug)
                    .cloned()
                    .ok_or(QuizError::SurveyNotFound(slug))?;
                QuizEvent::SurveySelected(survey)
            }
            UserIntent::SubmitDemographics(demographics) => {
                QuizEvent::DemographicsSubmitted(demographics)
            }
            UserIntent::Answer(answer) => QuizEvent::AnswerSubmitted(answer),
            UserIntent::Reset => QuizEvent::ResetRequested,
            UserIntent::Quit => return Ok(Vec::new()),
        };
        self.apply(event)
    }

    /// Executes effects until none are left.
    ///
    /// An insight request suspends here until the service answers; its
    /// outcome is applied as `InsightGenerated` or `InsightFailed`.
    pub async fn settle(&mut self, effects: Vec<Effect>) {
        let mut pending: VecDeque<Effect> = effects.into();

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::GenerateInsight(request) => {
                    let outcome = self
                        .insight_service
                        .generate_insight(
                            &request.answers,
                            &request.survey_title,
                            request.demographics.as_ref(),
                        )
                        .await;

                    let event = match outcome {
                        Ok(insight) => QuizEvent::InsightGenerated(insight),
                        Err(err) => QuizEvent::InsightFailed(err.to_string()),
                    };

                    match self.apply(event) {
                        Ok(more) => pending.extend(more),
                        Err(err) => {
                            tracing::error!(error = %err, "insight outcome rejected");
                        }
                    }
                }
                Effect::LogInsightFailure { reason } => {
                    tracing::error!(
                        survey = self.session.selected_survey().map(|s| s.title()).unwrap_or_default(),
                        %reason,
                        "insight generation failed"
                    );
                }
            }
        }
    }

    /// Submits an intent and settles its effects.
    ///
    /// # Errors
    ///
    /// Same as [`QuizController::submit`].
    pub async fn handle(&mut self, intent: UserIntent) -> Result<(), QuizError> {
        let effects = self.submit(intent)?;
        self.settle(effects).await;
        Ok(())
    }
}
