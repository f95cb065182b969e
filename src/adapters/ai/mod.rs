//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port used for the narrative summary.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models (default)
//! - `OpenAIProvider` - OpenAI-compatible chat completions
//! - `DisabledProvider` - No backend; always falls back
//! - `MockAIProvider` - Configurable mock for testing

mod disabled_provider;
mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use disabled_provider::DisabledProvider;
pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_RESPONSE};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_MODEL};

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Builds the configured summary provider.
///
/// A provider without an API key degrades to [`DisabledProvider`], so report
/// generation keeps working with the fallback summary.
///
/// # Errors
///
/// `AIError::InvalidRequest` if the HTTP client cannot be built.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let Some(api_key) = config.active_key() else {
        if config.provider != AiProvider::Disabled {
            tracing::warn!(
                provider = %config.provider,
                "no API key configured; summaries will use the fallback text"
            );
        }
        return Ok(Arc::new(DisabledProvider::new(format!(
            "no API key configured for {}",
            config.provider
        ))));
    };

    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Gemini => {
            let mut gemini = GeminiConfig::new(api_key)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(model) = &config.model {
                gemini = gemini.with_model(model);
            }
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProvider::OpenAI => {
            let mut openai = OpenAIConfig::new(api_key)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(model) = &config.model {
                openai = openai.with_model(model);
            }
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Disabled => Arc::new(DisabledProvider::new("summary provider disabled")),
    };

    let info = provider.provider_info();
    tracing::debug!(provider = %info.name, model = %info.model, "summary provider ready");

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    #[test]
    fn missing_key_builds_disabled_provider() {
        let provider = build_provider(&AiConfig::default()).unwrap();
        assert_eq!(provider.provider_info().name, "disabled");
    }

    #[test]
    fn gemini_key_builds_gemini_with_default_model() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        };
        let info = build_provider(&config).unwrap().provider_info();
        assert_eq!(info.name, "gemini");
        assert_eq!(info.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn openai_honours_model_override() {
        let config = AiConfig {
            provider: AiProvider::OpenAI,
            openai_api_key: Some(Secret::new("sk-test".to_string())),
            model: Some("gpt-4o".to_string()),
            ..Default::default()
        };
        let info = build_provider(&config).unwrap().provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-4o");
    }

    #[test]
    fn explicit_disabled_ignores_keys() {
        let config = AiConfig {
            provider: AiProvider::Disabled,
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        };
        let info = build_provider(&config).unwrap().provider_info();
        assert_eq!(info.name, "disabled");
    }
}
