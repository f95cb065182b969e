//! Mock AI Provider for testing.
//!
//! Scripted implementation of the AIProvider port so report generation can
//! be exercised without a network.
//!
//! # Features
//!
//! - Queued responses, consumed in order
//! - Simulated latency for timeout and cancellation tests
//! - Error injection
//! - Call capture for prompt assertions
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("快慢之间，皆是答案。")
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "快慢之间，皆是答案。");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Text returned once the queue is exhausted.
pub const DEFAULT_MOCK_RESPONSE: &str = "时间从不催促，每一步都恰逢其时。";

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting or exhausted quota.
    RateLimited { retry_after_secs: u32 },
    /// Simulate content filtering.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate an unparseable response.
    Malformed { message: String },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Malformed { message } => AIError::parse(message),
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        })
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the provider info.
    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        locked(&self.calls).clone()
    }

    /// Content of the first user message of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        locked(&self.calls)
            .last()
            .and_then(|request| request.messages.first())
            .map(|message| message.content.clone())
    }

    fn push(self, response: MockResponse) -> Self {
        locked(&self.responses).push_back(response);
        self
    }

    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: DEFAULT_MOCK_RESPONSE.to_string(),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        locked(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                usage: TokenUsage::new(40, content.chars().count() as u32),
                content,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReportId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(ReportId::new(), "trace-123"))
            .with_message(MessageRole::User, prompt)
    }

    #[tokio::test]
    async fn returns_responses_in_order_then_default() {
        let provider = MockAIProvider::new().with_response("First").with_response("Second");

        let r1 = provider.complete(test_request("a")).await.unwrap();
        let r2 = provider.complete(test_request("b")).await.unwrap();
        let r3 = provider.complete(test_request("c")).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r3.content, DEFAULT_MOCK_RESPONSE);
        assert_eq!(r1.model, "mock-model-1");
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.complete(test_request("p")).await.unwrap_err();
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn tracks_calls_and_prompts() {
        let provider = MockAIProvider::new();
        assert_eq!(provider.call_count(), 0);
        assert_eq!(provider.last_prompt(), None);

        provider.complete(test_request("first prompt")).await.unwrap();
        provider.complete(test_request("second prompt")).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_prompt().as_deref(), Some("second prompt"));
        assert_eq!(provider.get_calls()[0].metadata.trace_id, "trace-123");
    }

    #[tokio::test(start_paused = true)]
    async fn respects_delay() {
        let provider = MockAIProvider::new().with_delay(Duration::from_secs(5));

        let start = tokio::time::Instant::now();
        provider.complete(test_request("p")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn mock_error_converts_to_ai_error() {
        let err: AIError = MockError::AuthenticationFailed.into();
        assert!(matches!(err, AIError::AuthenticationFailed));

        let err: AIError = MockError::Malformed {
            message: "bad".into(),
        }
        .into();
        assert!(matches!(err, AIError::Parse(_)));
    }
}
