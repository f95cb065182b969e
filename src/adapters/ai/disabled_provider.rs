//! Provider used when no summary backend is configured.

use async_trait::async_trait;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Always answers `Unavailable`, so reports fall back to the canned summary.
#[derive(Debug, Clone, Default)]
pub struct DisabledProvider {
    reason: String,
}

impl DisabledProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl AIProvider for DisabledProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        Err(AIError::unavailable(if self.reason.is_empty() {
            "summary provider disabled"
        } else {
            self.reason.as_str()
        }))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("disabled", "none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReportId;
    use crate::ports::RequestMetadata;

    #[tokio::test]
    async fn always_unavailable() {
        let provider = DisabledProvider::new("no API key configured");
        let request = CompletionRequest::new(RequestMetadata::new(ReportId::new(), "t"));

        let err = provider.complete(request).await.unwrap_err();
        assert!(err.to_string().contains("no API key configured"));
        assert_eq!(provider.provider_info().name, "disabled");
    }
}
