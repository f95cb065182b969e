//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Narrative Summary
//!
//! - `AIProvider` - Text-generation backend for the life summary
//!
//! ## Report Export
//!
//! - `ReportExporter` - Renders a report into Markdown or JSON
//! - `ReportFileStorage` - Saves rendered reports to disk

mod ai_provider;
mod report_exporter;
mod report_file_storage;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use report_exporter::{
    suggested_filename, ExportError, ExportFormat, ExportedReport, ReportExporter,
    EXPORT_FILE_STEM,
};
pub use report_file_storage::{ReportFileStorage, SavedFile, StorageError};
