//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `INSIGHT_QUIZ` prefix and
//! nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use insight_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using provider {:?}", config.ai.provider);
//! ```

mod ai;
mod catalog;
mod error;
mod logging;

pub use ai::{AiConfig, AiProvider};
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully;
/// `validate` then reports what is missing (usually an API key).
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (Gemini/Anthropic/OpenAI/mock)
    #[serde(default)]
    pub ai: AiConfig,

    /// Survey catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `INSIGHT_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INSIGHT_QUIZ__AI__PROVIDER=anthropic` -> `ai.provider = anthropic`
    /// - `INSIGHT_QUIZ__CATALOG__PATH=surveys.yaml` -> `catalog.path = surveys.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INSIGHT_QUIZ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a missing provider key, out-of-range
    /// numbers, an unparsable log directive or an empty catalog path.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
