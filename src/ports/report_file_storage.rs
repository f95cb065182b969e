//! Report File Storage Port - Filesystem operations interface.
//!
//! The application depends on this trait to persist exported reports; the
//! local adapter writes into a configured directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::ExportedReport;

/// Port for saving exported reports.
///
/// # Contract
///
/// Implementations must:
/// - Create the target directory if it doesn't exist
/// - Write atomically (no partial content on failure)
/// - Overwrite an existing file of the same name
#[async_trait]
pub trait ReportFileStorage: Send + Sync {
    /// Save the exported report under its suggested filename.
    ///
    /// # Returns
    ///
    /// The path where the file was written.
    async fn save(&self, report: &ExportedReport) -> Result<SavedFile, StorageError>;

    /// Full path a report with this filename would be written to.
    fn file_path(&self, filename: &str) -> PathBuf;
}

/// Location and size of a saved report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl SavedFile {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for SavedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Export directory is missing and couldn't be created.
    #[error("Export directory unavailable: {path}")]
    DirectoryUnavailable { path: String },

    /// Filename would escape the export directory.
    #[error("Invalid filename: {filename}")]
    InvalidFilename { filename: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates a directory unavailable error.
    pub fn directory_unavailable(path: impl Into<String>) -> Self {
        Self::DirectoryUnavailable { path: path.into() }
    }

    /// Creates an invalid filename error.
    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}
