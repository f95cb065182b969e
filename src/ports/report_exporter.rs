//! Report Exporter Port - Document rendering interface.
//!
//! Turns a finished `LifeReport` into a downloadable document. Adapters
//! (Markdown, JSON) provide the implementation; writing the bytes somewhere
//! is the job of [`ReportFileStorage`](super::ReportFileStorage).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::LifeReport;

/// File name stem for exported reports; the birth date is appended.
pub const EXPORT_FILE_STEM: &str = "人生参照系_报告";

/// Port for rendering a report into a document format.
///
/// # Contract
///
/// Implementations must:
/// - Render every comparison of the report, in report order
/// - Include the narrative summary verbatim
/// - Be deterministic for a given report
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the report cannot be rendered.
    fn export(&self, report: &LifeReport) -> Result<ExportedReport, ExportError>;
}

/// Export formats supported by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Human-readable Markdown document.
    #[default]
    #[serde(alias = "md")]
    Markdown,
    /// Machine-readable JSON document.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered report with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    /// The rendered content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for saving.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedReport {
    /// Create a new exported report named after the profile's birth date.
    pub fn new(content: Vec<u8>, format: ExportFormat, report: &LifeReport) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: suggested_filename(report, format),
            format,
        }
    }

    /// Content as text; both formats are UTF-8.
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// `人生参照系_报告_{birth_date}.{ext}`
pub fn suggested_filename(report: &LifeReport, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_FILE_STEM,
        report.profile().birth_date(),
        format.extension()
    )
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The report has no summary yet.
    #[error("Report {0} is still a draft")]
    DraftReport(String),

    /// Serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Create a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }
}
