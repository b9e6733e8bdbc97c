//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat completions API.
//!
//! Also works against any OpenAI-compatible endpoint via `with_base_url`.
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{check_status, http_client, transport_error};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI API base URL (includes the version segment).
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Converts our request to OpenAI's format. The system prompt becomes
    /// the first message.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let system = request.system_prompt.iter().map(|prompt| OpenAIMessage {
            role: "system".to_string(),
            content: prompt.clone(),
        });

        let conversation = request.messages.iter().map(|msg| OpenAIMessage {
            role: match msg.role {
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "assistant".to_string(),
            },
            content: msg.content.clone(),
        });

        OpenAIRequest {
            model: self.config.model.clone(),
            messages: system.chain(conversation).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    fn from_openai_response(response: OpenAIResponse) -> Result<CompletionResponse, AIError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        if let Some(refusal) = choice.message.refusal {
            return Err(AIError::content_filtered(refusal));
        }

        let usage = response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
            model: response.model,
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let body = self.to_openai_request(&request);

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e, self.config.timeout.as_secs()))?;

        let response = check_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Self::from_openai_response(openai_response)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RequestMetadata;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<CompletionResponse, AIError> {
        OpenAIProvider::from_openai_response(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("sk-test")
            .with_model("gpt-4o")
            .with_base_url("http://localhost:11434/v1/")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.api_key(), "sk-test");
        let provider = OpenAIProvider::new(config).unwrap();
        assert_eq!(
            provider.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
        assert_eq!(provider.provider_info(), ProviderInfo::new("openai", "gpt-4o"));
    }

    #[test]
    fn system_prompt_is_first_message() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("k")).unwrap();
        let request = CompletionRequest::new(RequestMetadata::new("relationships", "t"))
            .with_system_prompt("Persona")
            .with_message(MessageRole::User, "Answers")
            .with_max_tokens(256);

        let body = serde_json::to_value(provider.to_openai_request(&request)).unwrap();
        assert_eq!(
            body["messages"],
            json!([
                { "role": "system", "content": "Persona" },
                { "role": "user", "content": "Answers" }
            ])
        );
        assert_eq!(body["max_tokens"], 256);
        assert_eq!(body["model"], DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn first_choice_is_returned() {
        let response = parse(json!({
            "model": "gpt-4o-mini-2024-07-18",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "You thrive on novelty." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 90, "completion_tokens": 6, "total_tokens": 96 }
        }))
        .unwrap();

        assert_eq!(response.content, "You thrive on novelty.");
        assert_eq!(response.usage.total_tokens, 96);
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn refusal_is_content_filtered() {
        let err = parse(json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": null, "refusal": "I can't help with that." },
                "finish_reason": "stop"
            }]
        }))
        .unwrap_err();

        assert_eq!(err, AIError::content_filtered("I can't help with that."));
    }

    #[test]
    fn empty_choices_is_parse_error() {
        let err = parse(json!({ "model": "m", "choices": [] })).unwrap_err();
        assert!(matches!(err, AIError::Parse(_)));
    }
}
