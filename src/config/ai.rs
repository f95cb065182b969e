//! Summary provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Summary provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which backend writes the narrative summary
    #[serde(default)]
    pub provider: AiProvider,

    /// Google Generative Language API key
    pub gemini_api_key: Option<Secret<String>>,

    /// OpenAI (or compatible) API key
    pub openai_api_key: Option<Secret<String>>,

    /// Model override; each provider has its own default
    pub model: Option<String>,

    /// Base URL override, e.g. for a proxy
    pub base_url: Option<String>,

    /// Deadline for the whole summary call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries on transient failures
    #[serde(default)]
    pub max_retries: u32,

    pub max_tokens: Option<u32>,

    pub temperature: Option<f32>,
}

/// Summary backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    #[serde(alias = "openai_compatible")]
    OpenAI,
    /// No backend; every report uses the fallback summary
    #[serde(alias = "none")]
    Disabled,
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiProvider::Gemini => write!(f, "gemini"),
            AiProvider::OpenAI => write!(f, "openai"),
            AiProvider::Disabled => write!(f, "disabled"),
        }
    }
}

fn non_empty(key: &Option<Secret<String>>) -> Option<&str> {
    key.as_ref()
        .map(|k| k.expose_secret().as_str())
        .filter(|k| !k.trim().is_empty())
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn gemini_key(&self) -> Option<&str> {
        non_empty(&self.gemini_api_key)
    }

    pub fn openai_key(&self) -> Option<&str> {
        non_empty(&self.openai_api_key)
    }

    /// API key of the selected provider, if any
    pub fn active_key(&self) -> Option<&str> {
        match self.provider {
            AiProvider::Gemini => self.gemini_key(),
            AiProvider::OpenAI => self.openai_key(),
            AiProvider::Disabled => None,
        }
    }

    /// Validate summary provider configuration
    ///
    /// A missing API key is not an error: reports still work with the
    /// fallback summary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.max_retries > 5 {
            return Err(ValidationError::TooManyRetries);
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ValidationError::InvalidTemperature);
            }
        }

        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
            max_retries: 0,
            max_tokens: None,
            temperature: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}
