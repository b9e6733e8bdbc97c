//! AI provider configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Deserialize)]
pub struct AiConfig {
    /// Provider used for insight generation
    #[serde(default)]
    pub provider: AiProvider,

    /// Gemini API key
    #[serde(default)]
    pub gemini_api_key: Option<SecretString>,

    /// Anthropic API key
    #[serde(default)]
    pub anthropic_api_key: Option<SecretString>,

    /// OpenAI API key
    #[serde(default)]
    pub openai_api_key: Option<SecretString>,

    /// Model override; each provider has its own default
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL override (proxies, compatible endpoints)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens in the generated insight
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    Anthropic,
    OpenAI,
    /// Canned responses, no network
    Mock,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key for the selected provider, if any
    pub fn api_key(&self) -> Option<&SecretString> {
        match self.provider {
            AiProvider::Gemini => self.gemini_api_key.as_ref(),
            AiProvider::Anthropic => self.anthropic_api_key.as_ref(),
            AiProvider::OpenAI => self.openai_api_key.as_ref(),
            AiProvider::Mock => None,
        }
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        use secrecy::ExposeSecret;

        let has_key = self
            .api_key()
            .is_some_and(|k| !k.expose_secret().trim().is_empty());

        match self.provider {
            AiProvider::Gemini if !has_key => {
                return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
            }
            AiProvider::Anthropic if !has_key => {
                return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
            }
            AiProvider::OpenAI if !has_key => {
                return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
            }
            _ => {}
        }

        if !(1..=300).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            anthropic_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> Option<SecretString> {
        Some(SecretString::new(value.to_string()))
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Gemini);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validation_requires_key_for_selected_provider() {
        let config = AiConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        );

        let config = AiConfig {
            provider: AiProvider::Anthropic,
            gemini_api_key: key("g-xxx"),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))
        );
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = AiConfig {
            provider: AiProvider::OpenAI,
            openai_api_key: key("   "),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_mock_needs_no_key() {
        let config = AiConfig {
            provider: AiProvider::Mock,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_range_checks() {
        let base = || AiConfig {
            provider: AiProvider::Mock,
            ..Default::default()
        };

        let config = AiConfig { timeout_secs: 0, ..base() };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let config = AiConfig { timeout_secs: 301, ..base() };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let config = AiConfig { max_tokens: 0, ..base() };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxTokens));

        let config = AiConfig { temperature: 2.5, ..base() };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));
    }

    #[test]
    fn test_provider_deserializes_lowercase() {
        let provider: AiProvider = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(provider, AiProvider::OpenAI);
        let provider: AiProvider = serde_json::from_str("\"mock\"").unwrap();
        assert_eq!(provider, AiProvider::Mock);
    }
}
