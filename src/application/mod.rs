//! Application layer - Session state and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The session reducer owns the wizard flow; handlers perform the work that
//! touches the outside world (summary provider, export storage).

pub mod handlers;
pub mod session;

pub use handlers::{
    ExportReportCommand, ExportReportError, ExportReportHandler, ExportReportResult,
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
    SummaryOptions,
};
pub use session::{LifeSession, SessionAction, SessionError, WizardStep};
