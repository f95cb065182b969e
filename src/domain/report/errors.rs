//! Report-specific error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Errors raised when a report cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// No milestone recorded in either dimension.
    #[error("请至少记录一个人生节点")]
    EmptyProfile,
}

impl ReportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::EmptyProfile => ErrorCode::EmptyProfile,
        }
    }
}
