//! Report handlers.
//!
//! - `GenerateReportHandler` - comparisons plus narrative summary
//! - `ExportReportHandler` - render and save a finished report

mod export_report;
mod generate_report;

pub use export_report::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
};
pub use generate_report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
    SummaryOptions, DEFAULT_SUMMARY_TIMEOUT,
};
