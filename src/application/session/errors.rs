//! Session-specific error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::report::ReportError;

/// Why a session action was rejected. The session is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Profile edits outside the input step.
    #[error("input is blocked while in the {0} step")]
    InputBlocked(WizardStep),

    /// Step change the wizard does not allow.
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: WizardStep, to: WizardStep },

    #[error("unknown age range: {0}")]
    UnknownAgeRange(String),

    #[error("unknown status '{code}' for {dimension}")]
    UnknownStatus { dimension: String, code: String },

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::InputBlocked(_) => ErrorCode::InputBlocked,
            SessionError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SessionError::UnknownAgeRange(_) => ErrorCode::UnknownAgeRange,
            SessionError::UnknownStatus { .. } => ErrorCode::UnknownStatus,
            SessionError::Report(err) => err.code(),
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}
