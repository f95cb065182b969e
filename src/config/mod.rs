//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `LIFE_BASELINE` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use life_baseline::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Summaries via {}", config.ai.provider);
//! ```

mod ai;
mod error;
mod report;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use report::ReportConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration (summaries then fall back to the canned text).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Narrative summary provider (Gemini/OpenAI/disabled)
    #[serde(default)]
    pub ai: AiConfig,

    /// Report export and display settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `LIFE_BASELINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LIFE_BASELINE__AI__PROVIDER=gemini` -> `ai.provider = gemini`
    /// - `LIFE_BASELINE__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `LIFE_BASELINE__REPORT__EXPORT_DIR=./out` -> `report.export_dir = ./out`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LIFE_BASELINE")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.report.validate()?;
        Ok(())
    }
}
