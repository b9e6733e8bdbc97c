//! Insight service backed by an LLM provider.

use async_trait::async_trait;
use std::fmt::Write as _;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::quiz::{Answer, Demographics};
use crate::ports::{
    AIProvider, CompletionRequest, InsightError, InsightService, MessageRole, RequestMetadata,
};

/// Persona and output rules for the analyst.
pub const INSIGHT_SYSTEM_PROMPT: &str = "You are an insightful, encouraging personality analyst. \
You receive a person's answers to a short multiple-choice survey. \
Write a personality insight addressed directly to them in the second person. \
Use two to four short paragraphs of plain prose without headings or lists. \
Highlight strengths and tendencies suggested by the pattern of answers, and offer one gentle \
suggestion for growth. Do not make clinical or diagnostic claims.";

/// Generates insights by prompting an [`AIProvider`].
pub struct LlmInsightService {
    provider: Arc<dyn AIProvider>,
    max_tokens: u32,
    temperature: f32,
}

impl LlmInsightService {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builds the user message: survey, optional demographics, numbered answers.
    pub fn build_prompt(
        answers: &[Answer],
        survey_title: &str,
        demographics: Option<&Demographics>,
    ) -> String {
        let mut prompt = format!("Survey: {}\n", survey_title);

        if let Some(gender) = demographics.map(|d| d.gender).filter(|g| g.is_disclosed()) {
            let _ = writeln!(prompt, "Respondent gender: {}", gender.label());
        }

        prompt.push_str("\nAnswers:\n");
        for (i, answer) in answers.iter().enumerate() {
            let _ = writeln!(
                prompt,
                "{}. {} -> {}",
                i + 1,
                answer.question_text,
                answer.answer
            );
        }

        prompt.push_str("\nWrite the personality insight now.");
        prompt
    }
}

#[async_trait]
impl InsightService for LlmInsightService {
    async fn generate_insight(
        &self,
        answers: &[Answer],
        survey_title: &str,
        demographics: Option<&Demographics>,
    ) -> Result<String, InsightError> {
        let trace_id = Uuid::new_v4().to_string();
        let request = CompletionRequest::new(RequestMetadata::new(survey_title, &trace_id))
            .with_system_prompt(INSIGHT_SYSTEM_PROMPT)
            .with_message(
                MessageRole::User,
                Self::build_prompt(answers, survey_title, demographics),
            )
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        tracing::debug!(%trace_id, survey = survey_title, answers = answers.len(), "requesting insight");

        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%trace_id, survey = survey_title, error = %err, "insight request failed");
                return Err(err.into());
            }
        };

        let insight = response.content.trim();
        if insight.is_empty() {
            tracing::error!(%trace_id, model = %response.model, "provider returned an empty completion");
            return Err(InsightError::service_failure("empty completion"));
        }

        tracing::info!(
            %trace_id,
            survey = survey_title,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            finish_reason = ?response.finish_reason,
            "insight generated"
        );

        Ok(insight.to_string())
    }
}
