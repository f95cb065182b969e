//! Integration tests for the report flow.
//!
//! These tests drive the whole path a user takes:
//! 1. Profile is built through the session reducer (or loaded from a file)
//! 2. GenerateReportHandler computes comparisons and asks the provider
//! 3. The finished report is stored in the session
//! 4. ExportReportHandler renders and saves it
//!
//! The summary provider is the scripted mock, so no network is involved.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use life_baseline::adapters::ai::{DisabledProvider, MockAIProvider, MockError};
use life_baseline::adapters::export::{
    JsonReportExporter, LocalReportStorage, MarkdownReportExporter,
};
use life_baseline::adapters::profile_file::load_profile;
use life_baseline::application::handlers::{
    ExportReportCommand, ExportReportHandler, GenerateReportCommand, GenerateReportError,
    GenerateReportHandler, SummaryOptions,
};
use life_baseline::application::session::{LifeSession, SessionAction, WizardStep};
use life_baseline::domain::foundation::CommandMetadata;
use life_baseline::domain::reference::{Dimension, TimingCategory};
use life_baseline::domain::report::{
    FallbackReason, ReportError, SummarySource, EMPTY_RESPONSE_FALLBACK, FAILURE_FALLBACK,
};
use life_baseline::ports::ExportFormat;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn session_with_milestones() -> LifeSession {
    [
        SessionAction::SetBirthDate("1993-04-08".parse().unwrap()),
        SessionAction::SelectStatus("stable".into()),
        SessionAction::SelectRange("31-35".into()),
        SessionAction::Commit,
        SessionAction::SwitchTab(Dimension::Career),
        SessionAction::SelectRange("21-25".into()),
        SessionAction::Commit,
    ]
    .into_iter()
    .fold(LifeSession::default(), |s, a| s.reduce(a).unwrap())
}

/// Drives one generation through the session, the way the wizard does.
async fn generate(session: LifeSession, handler: &GenerateReportHandler) -> LifeSession {
    let generating = session.reduce(SessionAction::BeginGeneration).unwrap();
    let result = handler
        .handle(
            GenerateReportCommand::new(generating.profile().clone()),
            CommandMetadata::new().with_source("integration-test"),
        )
        .await
        .unwrap();
    generating
        .reduce(SessionAction::FinishGeneration(result.report))
        .unwrap()
}

fn export_handler(dir: &TempDir) -> ExportReportHandler {
    ExportReportHandler::new(Arc::new(LocalReportStorage::new(dir.path())))
        .with_exporter(Arc::new(MarkdownReportExporter::new()))
        .with_exporter(Arc::new(JsonReportExporter::new()))
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn successful_generation_reaches_report_step() {
    let mock = MockAIProvider::new().with_response("时间与选择，彼此成就。");
    let handler = GenerateReportHandler::new(Arc::new(mock.clone()));

    let session = generate(session_with_milestones(), &handler).await;

    assert_eq!(session.step(), WizardStep::Report);
    let report = session.report().unwrap();
    assert_eq!(report.ai_summary(), "时间与选择，彼此成就。");

    // EMOTION comparisons come first.
    let dimensions: Vec<Dimension> = report.comparisons().iter().map(|c| c.dimension).collect();
    assert_eq!(dimensions, vec![Dimension::Emotion, Dimension::Career]);

    let career = report.comparisons_for(Dimension::Career).next().unwrap();
    assert_eq!(career.timing_category, TimingCategory::Early);
    assert_eq!(career.status_label, "开始第一份全职工作");

    let emotion = report.comparisons_for(Dimension::Emotion).next().unwrap();
    assert_eq!(emotion.timing_category, TimingCategory::Mainstream);

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("用户出生日期：1993-04-08"));
    assert!(prompt.contains("31-35岁发生[进入长期稳定关系](同行 (主流))"));
}

#[tokio::test]
async fn provider_error_yields_failure_fallback() {
    let mock = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
    let handler = GenerateReportHandler::new(Arc::new(mock));

    let session = generate(session_with_milestones(), &handler).await;

    assert_eq!(session.report().unwrap().ai_summary(), FAILURE_FALLBACK);
}

#[tokio::test]
async fn blank_response_yields_empty_fallback() {
    let mock = MockAIProvider::new().with_response("\n  \n");
    let handler = GenerateReportHandler::new(Arc::new(mock));

    let session = generate(session_with_milestones(), &handler).await;

    let report = session.report().unwrap();
    assert_eq!(report.ai_summary(), EMPTY_RESPONSE_FALLBACK);
    assert_eq!(
        report.summary_source(),
        &SummarySource::Fallback {
            reason: FallbackReason::EmptyResponse
        }
    );
}

#[tokio::test(start_paused = true)]
async fn slow_provider_yields_failure_fallback() {
    let mock = MockAIProvider::new()
        .with_response("never shown")
        .with_delay(Duration::from_secs(120));
    let handler = GenerateReportHandler::new(Arc::new(mock)).with_options(SummaryOptions {
        timeout: Duration::from_secs(30),
        ..Default::default()
    });

    let session = generate(session_with_milestones(), &handler).await;

    assert_eq!(session.report().unwrap().ai_summary(), FAILURE_FALLBACK);
}

#[tokio::test]
async fn disabled_provider_still_produces_report() {
    let handler = GenerateReportHandler::new(Arc::new(DisabledProvider::new("no key")));

    let session = generate(session_with_milestones(), &handler).await;

    assert_eq!(session.report().unwrap().ai_summary(), FAILURE_FALLBACK);
}

#[tokio::test]
async fn empty_profile_never_reaches_provider() {
    let mock = MockAIProvider::new();
    let handler = GenerateReportHandler::new(Arc::new(mock.clone()));

    let session = LifeSession::default();
    assert!(session.reduce(SessionAction::BeginGeneration).is_err());

    let err = handler
        .handle(
            GenerateReportCommand::new(session.profile().clone()),
            CommandMetadata::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err, GenerateReportError::Report(ReportError::EmptyProfile));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn regenerating_after_back_keeps_comparisons() {
    let handler = GenerateReportHandler::new(Arc::new(MockAIProvider::new()));

    let first = generate(session_with_milestones(), &handler).await;
    let back = first.reduce(SessionAction::BackToInput).unwrap();
    let second = generate(back, &handler).await;

    assert_eq!(
        first.report().unwrap().comparisons(),
        second.report().unwrap().comparisons()
    );
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn exports_markdown_and_json_side_by_side() {
    let dir = TempDir::new().unwrap();
    let handler = GenerateReportHandler::new(Arc::new(
        MockAIProvider::new().with_response("快与慢都算数。"),
    ));
    let session = generate(session_with_milestones(), &handler).await;
    let report = session.report().unwrap().clone();
    let exporter = export_handler(&dir);

    let md = exporter
        .handle(
            ExportReportCommand::new(report.clone(), ExportFormat::Markdown),
            CommandMetadata::new(),
        )
        .await
        .unwrap();
    let json = exporter
        .handle(
            ExportReportCommand::new(report, ExportFormat::Json),
            CommandMetadata::new(),
        )
        .await
        .unwrap();

    let markdown = std::fs::read_to_string(md.saved.as_path()).unwrap();
    assert!(markdown.starts_with("# 人生参照报告"));
    assert!(markdown.contains("> 快与慢都算数。"));
    let career = markdown.find("## 事业轨迹").unwrap();
    let emotion = markdown.find("## 情感轨迹").unwrap();
    assert!(career < emotion);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json.saved.as_path()).unwrap()).unwrap();
    assert_eq!(value["comparisons"].as_array().unwrap().len(), 2);
    assert_eq!(
        json.saved.path.file_name().unwrap().to_string_lossy(),
        "人生参照系_报告_1993-04-08.json"
    );
}

// =============================================================================
// Profile files
// =============================================================================

#[tokio::test]
async fn loaded_profile_with_odd_label_degrades() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.yaml");
    std::fs::write(
        &path,
        r#"
birth_date: 1980-12-01
milestones:
  CAREER:
    - age_range: "late twenties"
      status_code: change_job
    - age_range: "41-45"
      status_code: success
"#,
    )
    .unwrap();

    let profile = load_profile(&path).await.unwrap();
    let handler = GenerateReportHandler::new(Arc::new(MockAIProvider::new()));
    let report = handler
        .handle(GenerateReportCommand::new(profile), CommandMetadata::new())
        .await
        .unwrap()
        .report;

    let career: Vec<_> = report.comparisons_for(Dimension::Career).collect();
    // Parseable labels first, the unparseable one last.
    assert_eq!(career[0].age_range_label, "41-45");
    assert_eq!(career[0].timing_category, TimingCategory::Late);
    assert_eq!(career[1].age_range_label, "late twenties");
    assert_eq!(career[1].timing_category, TimingCategory::Mainstream);
    assert!(career[1].distribution.iter().all(|p| !p.is_user_position));
}
