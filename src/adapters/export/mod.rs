//! Report export adapters.
//!
//! - `MarkdownReportExporter` / `JsonReportExporter` - ReportExporter implementations
//! - `LocalReportStorage` - ReportFileStorage on the local filesystem

mod json_exporter;
mod local_report_storage;
mod markdown_exporter;

pub use json_exporter::JsonReportExporter;
pub use local_report_storage::LocalReportStorage;
pub use markdown_exporter::MarkdownReportExporter;

use crate::ports::{ExportFormat, ReportExporter};

/// Exporter for the requested format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn ReportExporter> {
    match format {
        ExportFormat::Markdown => Box::new(MarkdownReportExporter::new()),
        ExportFormat::Json => Box::new(JsonReportExporter::new()),
    }
}
