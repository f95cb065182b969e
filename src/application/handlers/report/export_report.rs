//! ExportReportHandler - Command handler for saving a report to disk.
//!
//! Renders a finished report with the exporter registered for the requested
//! format and hands the bytes to file storage.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{CommandMetadata, ErrorCode};
use crate::domain::report::LifeReport;
use crate::ports::{
    ExportError, ExportFormat, ReportExporter, ReportFileStorage, SavedFile, StorageError,
};

/// Command to export a report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub report: LifeReport,
    pub format: ExportFormat,
}

impl ExportReportCommand {
    pub fn new(report: LifeReport, format: ExportFormat) -> Self {
        Self { report, format }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub saved: SavedFile,
    pub format: ExportFormat,
}

/// Errors that can occur when exporting a report.
#[derive(Debug, Clone, Error)]
pub enum ExportReportError {
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Saving report failed: {0}")]
    Storage(#[from] StorageError),
}

impl ExportReportError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ExportFailed
    }
}

/// Handler for exporting reports.
///
/// # Dependencies
///
/// - `ReportExporter`: one per supported format
/// - `ReportFileStorage`: where rendered files go
pub struct ExportReportHandler {
    exporters: HashMap<ExportFormat, Arc<dyn ReportExporter>>,
    storage: Arc<dyn ReportFileStorage>,
}

impl ExportReportHandler {
    pub fn new(storage: Arc<dyn ReportFileStorage>) -> Self {
        Self {
            exporters: HashMap::new(),
            storage,
        }
    }

    /// Builder: Register an exporter under the format it produces.
    pub fn with_exporter(mut self, exporter: Arc<dyn ReportExporter>) -> Self {
        self.exporters.insert(exporter.format(), exporter);
        self
    }

    pub async fn handle(
        &self,
        cmd: ExportReportCommand,
        metadata: CommandMetadata,
    ) -> Result<ExportReportResult, ExportReportError> {
        let exporter = self
            .exporters
            .get(&cmd.format)
            .ok_or_else(|| ExportError::UnsupportedFormat(cmd.format.to_string()))?;

        let exported = exporter.export(&cmd.report)?;
        let saved = self.storage.save(&exported).await?;

        tracing::info!(
            report_id = %cmd.report.id(),
            format = %cmd.format,
            path = %saved,
            bytes = saved.size_bytes,
            source = metadata.source().unwrap_or("unknown"),
            "report exported"
        );

        Ok(ExportReportResult {
            saved,
            format: cmd.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::{JsonReportExporter, LocalReportStorage, MarkdownReportExporter};
    use crate::domain::profile::UserProfile;
    use crate::domain::reference::{AgeRange, Dimension};
    use crate::domain::report::NarrativeSummary;
    use tempfile::TempDir;

    fn finished_report() -> LifeReport {
        let mut profile = UserProfile::new("1990-03-04".parse().unwrap());
        profile.commit(Dimension::Emotion, AgeRange::new("31-35"), "stable");
        LifeReport::draft(profile)
            .unwrap()
            .with_summary(NarrativeSummary::from_completion("稳稳当当。"))
    }

    fn handler(dir: &TempDir) -> ExportReportHandler {
        ExportReportHandler::new(Arc::new(LocalReportStorage::new(dir.path())))
            .with_exporter(Arc::new(MarkdownReportExporter::new()))
            .with_exporter(Arc::new(JsonReportExporter::new()))
    }

    #[tokio::test]
    async fn writes_markdown_under_suggested_name() {
        let dir = TempDir::new().unwrap();
        let result = handler(&dir)
            .handle(
                ExportReportCommand::new(finished_report(), ExportFormat::Markdown),
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert_eq!(
            result.saved.path,
            dir.path().join("人生参照系_报告_1990-03-04.md")
        );
        let written = std::fs::read_to_string(&result.saved.path).unwrap();
        assert!(written.contains("稳稳当当。"));
        assert_eq!(result.saved.size_bytes, written.len() as u64);
    }

    #[tokio::test]
    async fn writes_json() {
        let dir = TempDir::new().unwrap();
        let result = handler(&dir)
            .handle(
                ExportReportCommand::new(finished_report(), ExportFormat::Json),
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        let written = std::fs::read_to_string(&result.saved.path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["ai_summary"], "稳稳当当。");
    }

    #[tokio::test]
    async fn missing_exporter_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let handler = ExportReportHandler::new(Arc::new(LocalReportStorage::new(dir.path())));
        let err = handler
            .handle(
                ExportReportCommand::new(finished_report(), ExportFormat::Json),
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExportReportError::Export(ExportError::UnsupportedFormat(_))
        ));
        assert_eq!(err.code(), ErrorCode::ExportFailed);
    }

    #[tokio::test]
    async fn draft_report_is_not_written() {
        let dir = TempDir::new().unwrap();
        let draft = LifeReport::draft(finished_report().profile().clone()).unwrap();
        let err = handler(&dir)
            .handle(
                ExportReportCommand::new(draft, ExportFormat::Markdown),
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ExportReportError::Export(ExportError::DraftReport(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
