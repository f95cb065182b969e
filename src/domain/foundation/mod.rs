//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the life baseline domain.

mod birth_date;
mod command;
mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use birth_date::BirthDate;
pub use command::CommandMetadata;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{MilestoneId, ReportId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
