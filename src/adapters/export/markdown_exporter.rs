//! Markdown report exporter.
//!
//! Lays the report out the way the report screen does: header with the birth
//! date, the summary as a quote, then one section per dimension with a
//! reference table for every milestone.

use crate::domain::comparison::ComparisonData;
use crate::domain::reference::Dimension;
use crate::domain::report::LifeReport;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExporter};

/// Fixed-template implementation of ReportExporter.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportExporter;

impl MarkdownReportExporter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(report: &LifeReport) -> String {
        format!(
            "# 人生参照报告\n\n**出生日期：** {}\n\n",
            report.profile().birth_date()
        )
    }

    fn render_summary(report: &LifeReport) -> String {
        let quoted = report
            .ai_summary()
            .lines()
            .map(|line| format!("> {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n\n", quoted)
    }

    fn render_comparison(comparison: &ComparisonData) -> String {
        let mut section = format!(
            "### {} · {}岁 · {}\n\n",
            comparison.status_label,
            comparison.age_range_label,
            comparison.timing_category.label()
        );

        section.push_str("| 参照区间 | 占比 | 你的位置 |\n");
        section.push_str("|----------|------|----------|\n");
        for point in &comparison.distribution {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                point.age_range,
                point.percentage,
                if point.is_user_position { "●" } else { "" }
            ));
        }
        section.push('\n');
        section
    }

    fn render_dimension(report: &LifeReport, dimension: Dimension) -> Option<String> {
        let comparisons: Vec<_> = report.comparisons_for(dimension).collect();
        if comparisons.is_empty() {
            return None;
        }

        let mut section = format!("## {}\n\n", dimension.track_title());
        for comparison in comparisons {
            section.push_str(&Self::render_comparison(comparison));
        }
        Some(section)
    }

    /// Renders the full document.
    pub fn render(&self, report: &LifeReport) -> String {
        let mut doc = Self::render_header(report);
        doc.push_str(&Self::render_summary(report));

        for dimension in Dimension::REPORT_ORDER {
            if let Some(section) = Self::render_dimension(report, dimension) {
                doc.push_str(&section);
            }
        }

        doc.push_str(&format!(
            "---\n\n*Life Reference System · {}*\n",
            report.generated_at()
        ));
        doc
    }
}

impl ReportExporter for MarkdownReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn export(&self, report: &LifeReport) -> Result<ExportedReport, ExportError> {
        if report.is_draft() {
            return Err(ExportError::DraftReport(report.id().to_string()));
        }

        Ok(ExportedReport::new(
            self.render(report).into_bytes(),
            ExportFormat::Markdown,
            report,
        ))
    }
}
