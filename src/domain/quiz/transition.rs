//! Pure transition function of the quiz state machine.
//!
//! `transition` never performs I/O. Anything that has to happen outside the
//! session (calling the insight service, logging a failure) is returned as an
//! [`Effect`] and the outcome comes back later as another [`QuizEvent`].

use super::{Effect, QuizError, QuizEvent, QuizSession, QuizStage};
use crate::domain::foundation::StateMachine;

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: QuizSession,
    pub effects: Vec<Effect>,
}

/// Applies `event` to `session`, returning the next session and its effects.
///
/// The input session is left untouched, so a rejected event costs nothing.
///
/// # Errors
///
/// - `InvalidTransition` if the event is not accepted in the current stage
///   (including any reset while `Loading`)
/// - `InvalidSurvey` if the selected survey fails catalog validation
/// - `UnknownOption` if an answer is not one of the current question's options
pub fn transition(session: &QuizSession, event: QuizEvent) -> Result<Transition, QuizError> {
    let stage = session.stage();
    let event_name = event.name();
    let mut next = session.clone();
    let mut effects = Vec::new();

    match (stage, event) {
        (QuizStage::Selection, QuizEvent::SurveySelected(survey)) => {
            survey
                .validate()
                .map_err(|err| QuizError::InvalidSurvey {
                    slug: survey.slug().clone(),
                    reason: err.to_string(),
                })?;
            next.select_survey(survey);
        }
        (QuizStage::Demographics, QuizEvent::DemographicsSubmitted(demographics)) => {
            next.start_quiz(demographics);
        }
        (QuizStage::Quiz, QuizEvent::AnswerSubmitted(answer)) => {
            if let Some(request) = next.record_answer(answer)? {
                effects.push(Effect::GenerateInsight(request));
            }
        }
        (QuizStage::Loading, QuizEvent::InsightGenerated(insight)) => {
            if insight.trim().is_empty() {
                next.fail_insight();
                effects.push(Effect::LogInsightFailure {
                    reason: "insight service returned an empty insight".to_string(),
                });
            } else {
                next.complete_insight(insight);
            }
        }
        (QuizStage::Loading, QuizEvent::InsightFailed(reason)) => {
            next.fail_insight();
            effects.push(Effect::LogInsightFailure { reason });
        }
        (stage, QuizEvent::ResetRequested) if stage.accepts_reset() => {
            next.reset();
        }
        (stage, _) => return Err(QuizError::invalid_transition(stage, event_name)),
    }

    stage.transition_to(next.stage())?;
    debug_assert_eq!(next.invariant_violation(), None);

    Ok(Transition {
        session: next,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Question, Survey};
    use crate::domain::foundation::{ErrorCode, QuestionId, SurveySlug};
    use crate::domain::quiz::{
        Answer, Demographics, Gender, InsightRequest, INSIGHT_FAILURE_MESSAGE,
    };
    use proptest::prelude::*;

    fn survey_with(count: u32) -> Survey {
        let questions = (1..=count)
            .map(|id| Question::new(QuestionId::new(id), format!("Question {}", id), ["A", "B", "C"]))
            .collect();
        Survey::new(SurveySlug::new("test").unwrap(), "Test Survey", "", questions).unwrap()
    }

    fn demographics() -> Demographics {
        Demographics::new(Gender::Female)
    }

    fn apply(session: &QuizSession, event: QuizEvent) -> Transition {
        transition(session, event).unwrap()
    }

    fn in_quiz(survey: Survey) -> QuizSession {
        let s = apply(&QuizSession::new(), QuizEvent::SurveySelected(survey)).session;
        apply(&s, QuizEvent::DemographicsSubmitted(demographics())).session
    }

    /// Answers every question with the given choices; returns the loading session and its effects.
    fn answer_all(mut session: QuizSession, answers: &[&str]) -> Transition {
        let mut last = None;
        for answer in answers {
            let t = apply(&session, QuizEvent::AnswerSubmitted(answer.to_string()));
            session = t.session.clone();
            last = Some(t);
        }
        last.unwrap()
    }

    // Selection

    #[test]
    fn selecting_survey_moves_to_demographics() {
        let survey = survey_with(2);
        let t = apply(&QuizSession::new(), QuizEvent::SurveySelected(survey.clone()));

        assert_eq!(t.session.stage(), QuizStage::Demographics);
        assert_eq!(t.session.selected_survey(), Some(&survey));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn survey_without_questions_is_rejected_at_selection() {
        let survey: Survey = serde_json::from_str(
            r#"{"slug":"empty","title":"Empty","description":"","questions":[]}"#,
        )
        .unwrap();

        let err = transition(&QuizSession::new(), QuizEvent::SurveySelected(survey)).unwrap_err();

        assert!(matches!(err, QuizError::InvalidSurvey { ref slug, .. } if slug.as_str() == "empty"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn answer_rejected_during_selection() {
        let result = transition(&QuizSession::new(), QuizEvent::AnswerSubmitted("A".into()));
        assert_eq!(
            result.unwrap_err(),
            QuizError::invalid_transition(QuizStage::Selection, "answer_submitted")
        );
    }

    // Demographics

    #[test]
    fn submitting_demographics_starts_quiz_at_first_question() {
        let session = in_quiz(survey_with(3));

        assert_eq!(session.stage(), QuizStage::Quiz);
        assert_eq!(session.demographics(), Some(&demographics()));
        assert_eq!(session.current_question_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.current_question().unwrap().id(), QuestionId::new(1));
    }

    #[test]
    fn second_survey_selection_rejected_in_demographics() {
        let s = apply(&QuizSession::new(), QuizEvent::SurveySelected(survey_with(1))).session;
        let result = transition(&s, QuizEvent::SurveySelected(survey_with(2)));
        assert!(matches!(result, Err(QuizError::InvalidTransition { .. })));
    }

    // Quiz

    #[test]
    fn answer_advances_index_and_appends() {
        let session = in_quiz(survey_with(3));
        let t = apply(&session, QuizEvent::AnswerSubmitted("B".into()));

        assert_eq!(t.session.stage(), QuizStage::Quiz);
        assert_eq!(t.session.current_question_index(), 1);
        assert_eq!(t.session.answers().len(), 1);
        assert_eq!(t.session.answers()[0].question_id, QuestionId::new(1));
        assert_eq!(t.session.answers()[0].question_text, "Question 1");
        assert!(t.effects.is_empty());
    }

    #[test]
    fn unknown_option_is_rejected_without_change() {
        let session = in_quiz(survey_with(2));
        let result = transition(&session, QuizEvent::AnswerSubmitted("Z".into()));

        assert_eq!(
            result.unwrap_err(),
            QuizError::UnknownOption {
                question_id: QuestionId::new(1),
                answer: "Z".to_string(),
            }
        );
        assert_eq!(session.answers().len(), 0);
    }

    #[test]
    fn last_answer_moves_to_loading_and_requests_insight() {
        let t = answer_all(in_quiz(survey_with(2)), &["A", "B"]);

        assert_eq!(t.session.stage(), QuizStage::Loading);
        assert_eq!(t.session.answers().len(), 2);
        assert_eq!(
            t.effects,
            vec![Effect::GenerateInsight(InsightRequest {
                survey_title: "Test Survey".to_string(),
                answers: t.session.answers().to_vec(),
                demographics: Some(demographics()),
            })]
        );
    }

    // Loading

    #[test]
    fn success_moves_to_result() {
        let loading = answer_all(in_quiz(survey_with(2)), &["A", "B"]).session;
        let t = apply(&loading, QuizEvent::InsightGenerated("You are curious.".into()));

        assert_eq!(t.session.stage(), QuizStage::Result);
        assert_eq!(t.session.insight(), "You are curious.");
        assert!(t.effects.is_empty());
        assert_eq!(
            t.session.answers(),
            &[
                Answer {
                    question_id: QuestionId::new(1),
                    question_text: "Question 1".to_string(),
                    answer: "A".to_string(),
                },
                Answer {
                    question_id: QuestionId::new(2),
                    question_text: "Question 2".to_string(),
                    answer: "B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn failure_moves_to_error_and_logs_reason() {
        let loading = answer_all(in_quiz(survey_with(2)), &["A", "B"]).session;
        let t = apply(&loading, QuizEvent::InsightFailed("HTTP 503".into()));

        assert_eq!(t.session.stage(), QuizStage::Error);
        assert_eq!(t.session.error_message(), INSIGHT_FAILURE_MESSAGE);
        assert_eq!(
            t.effects,
            vec![Effect::LogInsightFailure {
                reason: "HTTP 503".to_string()
            }]
        );
        assert!(!t.session.error_message().contains("503"));
    }

    #[test]
    fn blank_insight_is_treated_as_failure() {
        let loading = answer_all(in_quiz(survey_with(1)), &["C"]).session;
        let t = apply(&loading, QuizEvent::InsightGenerated("  \n".into()));

        assert_eq!(t.session.stage(), QuizStage::Error);
        assert_eq!(t.session.insight(), "");
    }

    #[test]
    fn loading_rejects_reset_and_answers() {
        let loading = answer_all(in_quiz(survey_with(1)), &["A"]).session;

        assert!(transition(&loading, QuizEvent::ResetRequested).is_err());
        assert!(transition(&loading, QuizEvent::AnswerSubmitted("A".into())).is_err());
    }

    #[test]
    fn service_outcome_rejected_outside_loading() {
        let session = in_quiz(survey_with(2));
        let result = transition(&session, QuizEvent::InsightGenerated("early".into()));
        assert!(matches!(result, Err(QuizError::InvalidTransition { .. })));
    }

    // Reset

    #[test]
    fn reset_from_result_and_error_returns_initial_session() {
        let loading = answer_all(in_quiz(survey_with(2)), &["A", "B"]).session;
        let result = apply(&loading, QuizEvent::InsightGenerated("ok".into())).session;
        let error = apply(&loading, QuizEvent::InsightFailed("down".into())).session;

        assert_eq!(apply(&result, QuizEvent::ResetRequested).session, QuizSession::new());
        assert_eq!(apply(&error, QuizEvent::ResetRequested).session, QuizSession::new());
    }

    #[test]
    fn reset_in_selection_is_a_no_op() {
        let t = apply(&QuizSession::new(), QuizEvent::ResetRequested);
        assert_eq!(t.session, QuizSession::new());
    }

    // Properties

    proptest! {
        #[test]
        fn completed_quiz_records_one_answer_per_question_in_order(
            choices in prop::collection::vec(0usize..3, 1..12)
        ) {
            let survey = survey_with(choices.len() as u32);
            let labels = ["A", "B", "C"];
            let answers: Vec<&str> = choices.iter().map(|c| labels[*c]).collect();

            let t = answer_all(in_quiz(survey.clone()), &answers);

            prop_assert_eq!(t.session.stage(), QuizStage::Loading);
            prop_assert_eq!(t.session.answers().len(), survey.question_count());
            for ((answer, question), chosen) in t.session.answers().iter().zip(survey.questions()).zip(&answers) {
                prop_assert_eq!(answer.question_id, question.id());
                prop_assert_eq!(&answer.question_text, question.text());
                prop_assert_eq!(answer.answer.as_str(), *chosen);
            }
        }

        #[test]
        fn progress_stays_within_bounds(count in 1u32..15, answered in 0usize..15) {
            let survey = survey_with(count);
            let mut session = in_quiz(survey);
            for _ in 0..answered.min(count as usize - 1) {
                session = apply(&session, QuizEvent::AnswerSubmitted("A".into())).session;
            }

            let progress = session.progress().unwrap();
            prop_assert!(1 <= progress.current);
            prop_assert!(progress.current <= progress.total);
            prop_assert_eq!(progress.total, count as usize);
            prop_assert_eq!(progress.current, session.current_question_index() + 1);
        }

        #[test]
        fn reset_always_yields_initial_snapshot(count in 1u32..6, steps in 0usize..8, succeed in any::<bool>()) {
            let survey = survey_with(count);
            let mut session = QuizSession::new();
            let mut events = vec![
                QuizEvent::SurveySelected(survey),
                QuizEvent::DemographicsSubmitted(demographics()),
            ];
            events.extend((0..count).map(|_| QuizEvent::AnswerSubmitted("B".into())));
            events.push(if succeed {
                QuizEvent::InsightGenerated("insight".into())
            } else {
                QuizEvent::InsightFailed("boom".into())
            });

            for event in events.into_iter().take(steps) {
                session = apply(&session, event).session;
            }

            if session.stage().accepts_reset() {
                let reset = apply(&session, QuizEvent::ResetRequested).session;
                prop_assert_eq!(&reset, &QuizSession::new());
                prop_assert_eq!(reset.invariant_violation(), None);
            } else {
                prop_assert!(transition(&session, QuizEvent::ResetRequested).is_err());
            }
        }
    }
}
