//! GenerateReportHandler - Command handler for building a life report.
//!
//! Runs the comparison engine over the profile, then asks the summary
//! provider for the narrative under an explicit timeout. Provider failures
//! never reach the caller: they are absorbed into the fallback summary.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::domain::foundation::{CommandMetadata, ErrorCode};
use crate::domain::profile::UserProfile;
use crate::domain::report::{
    build_prompt, FallbackReason, LifeReport, NarrativeSummary, ReportError, SummarySource,
};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, TokenUsage,
};

/// Default wait for the summary provider.
pub const DEFAULT_SUMMARY_TIMEOUT: Duration = Duration::from_secs(30);

/// Command to generate a report for a profile.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub profile: UserProfile,
}

impl GenerateReportCommand {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

/// Result of a report generation.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    /// The finished report; its summary is never empty.
    pub report: LifeReport,
    /// Token usage, when the provider answered.
    pub usage: Option<TokenUsage>,
}

/// Errors that can occur when generating a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateReportError {
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl GenerateReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerateReportError::Report(err) => err.code(),
        }
    }
}

/// Tuning for the summary request.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    pub timeout: Duration,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_SUMMARY_TIMEOUT,
            max_tokens: None,
            temperature: None,
        }
    }
}

/// Handler for generating life reports.
///
/// # Dependencies
///
/// - `AIProvider`: narrative summary text
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateReportHandler::new(provider);
/// let result = handler.handle(GenerateReportCommand::new(profile), metadata).await?;
/// println!("{}", result.report.ai_summary());
/// ```
pub struct GenerateReportHandler {
    ai_provider: Arc<dyn AIProvider>,
    options: SummaryOptions,
}

impl GenerateReportHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            options: SummaryOptions::default(),
        }
    }

    /// Builder: Override the summary request tuning.
    pub fn with_options(mut self, options: SummaryOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the report.
    ///
    /// # Errors
    ///
    /// - `Report(EmptyProfile)` when the profile has no milestones
    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
        metadata: CommandMetadata,
    ) -> Result<GenerateReportResult, GenerateReportError> {
        // 1. Comparisons run synchronously, before any network work
        let draft = LifeReport::draft(cmd.profile)?;

        // 2. Ask the provider for the narrative
        let request = self.build_request(&draft, &metadata);
        let outcome = tokio::time::timeout(self.options.timeout, self.ai_provider.complete(request))
            .await;

        // 3. Every outcome ends in displayable text
        let (summary, usage) = match outcome {
            Ok(Ok(response)) => (
                NarrativeSummary::from_completion(&response.content),
                Some(response.usage),
            ),
            Ok(Err(err)) => (self.provider_failed(&draft, err), None),
            Err(_) => {
                tracing::warn!(
                    report_id = %draft.id(),
                    timeout_secs = self.options.timeout.as_secs(),
                    "summary provider timed out; using fallback"
                );
                (NarrativeSummary::fallback(FallbackReason::TimedOut), None)
            }
        };

        if summary.source
            == (SummarySource::Fallback {
                reason: FallbackReason::EmptyResponse,
            })
        {
            tracing::warn!(report_id = %draft.id(), "summary provider returned blank text");
        }

        let report = draft.with_summary(summary);
        tracing::info!(
            report_id = %report.id(),
            comparisons = report.comparisons().len(),
            fallback = report.summary_source() != &SummarySource::Generated,
            source = metadata.source().unwrap_or("unknown"),
            "life report generated"
        );

        Ok(GenerateReportResult { report, usage })
    }

    fn build_request(&self, draft: &LifeReport, metadata: &CommandMetadata) -> CompletionRequest {
        let mut request = CompletionRequest::new(RequestMetadata::new(
            draft.id(),
            metadata.correlation_id(),
        ))
        .with_message(MessageRole::User, build_prompt(draft));

        if let Some(max_tokens) = self.options.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.options.temperature {
            request = request.with_temperature(temperature);
        }
        request
    }

    fn provider_failed(&self, draft: &LifeReport, err: AIError) -> NarrativeSummary {
        let provider = self.ai_provider.provider_info();
        tracing::warn!(
            report_id = %draft.id(),
            provider = %provider.name,
            error = %err,
            "summary provider failed; using fallback"
        );
        NarrativeSummary::fallback(FallbackReason::ProviderError(err.to_string()))
    }
}
