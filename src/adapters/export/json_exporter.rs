//! JSON report exporter.

use crate::domain::report::LifeReport;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExporter};

/// Serializes the whole report, comparisons and summary source included.
#[derive(Debug, Clone, Default)]
pub struct JsonReportExporter {
    compact: bool,
}

impl JsonReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

impl ReportExporter for JsonReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, report: &LifeReport) -> Result<ExportedReport, ExportError> {
        if report.is_draft() {
            return Err(ExportError::DraftReport(report.id().to_string()));
        }

        let bytes = if self.compact {
            serde_json::to_vec(report)
        } else {
            serde_json::to_vec_pretty(report)
        }
        .map_err(|e| ExportError::serialization(e.to_string()))?;

        Ok(ExportedReport::new(bytes, ExportFormat::Json, report))
    }
}
