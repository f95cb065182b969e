//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod report;

pub use report::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
    SummaryOptions,
};
