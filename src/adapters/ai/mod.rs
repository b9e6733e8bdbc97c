//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models (default)
//! - `AnthropicProvider` - Anthropic Claude models
//! - `OpenAIProvider` - OpenAI GPT models and compatible endpoints
//! - `MockAIProvider` - Configurable mock for tests and offline runs

mod anthropic_provider;
mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider, DEFAULT_ANTHROPIC_MODEL};
pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, MOCK_DEFAULT_INSIGHT};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_MODEL};

use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Builds the provider selected in configuration.
///
/// # Errors
///
/// `InvalidRequest` if the selected provider has no API key or its HTTP
/// client cannot be built.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let api_key = || {
        config
            .api_key()
            .map(|k| k.expose_secret().clone())
            .ok_or_else(|| AIError::InvalidRequest("missing API key".to_string()))
    };

    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Gemini => {
            let mut cfg = GeminiConfig::new(api_key()?).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                cfg = cfg.with_model(model);
            }
            if let Some(url) = &config.base_url {
                cfg = cfg.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(cfg)?)
        }
        AiProvider::Anthropic => {
            let mut cfg = AnthropicConfig::new(api_key()?).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                cfg = cfg.with_model(model);
            }
            if let Some(url) = &config.base_url {
                cfg = cfg.with_base_url(url);
            }
            Arc::new(AnthropicProvider::new(cfg)?)
        }
        AiProvider::OpenAI => {
            let mut cfg = OpenAIConfig::new(api_key()?).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                cfg = cfg.with_model(model);
            }
            if let Some(url) = &config.base_url {
                cfg = cfg.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(cfg)?)
        }
        AiProvider::Mock => Arc::new(MockAIProvider::new()),
    };

    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "AI provider ready");

    Ok(provider)
}

/// HTTP client shared by the REST providers.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, AIError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))
}

/// Passes successful responses through; maps everything else to `AIError`.
pub(crate) async fn check_status(response: Response) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "AI provider returned an error status");
    Err(status_error(status.as_u16(), error_body))
}

/// Maps a non-success HTTP status and its body.
pub(crate) fn status_error(status: u16, body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(body),
        400 | 404 | 422 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Maps a reqwest transport error, distinguishing timeouts.
pub(crate) fn transport_error(err: reqwest::Error, timeout_secs: u64) -> AIError {
    if err.is_timeout() {
        AIError::Timeout { timeout_secs }
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}
