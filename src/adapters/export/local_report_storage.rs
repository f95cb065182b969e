//! Local Filesystem Storage Adapter - Implementation of ReportFileStorage.
//!
//! Writes exported reports into a single export directory.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{ExportedReport, ReportFileStorage, SavedFile, StorageError};

/// Local filesystem storage for exported reports.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// A crash mid-write never leaves a truncated report behind.
#[derive(Debug, Clone)]
pub struct LocalReportStorage {
    base_path: PathBuf,
}

impl LocalReportStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn temp_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(format!("{}.tmp", filename))
    }

    /// Only a bare file name is accepted; anything with directories in it
    /// would escape the export directory.
    fn check_filename(filename: &str) -> Result<(), StorageError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(StorageError::invalid_filename(filename)),
        }
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            tracing::warn!(path = %self.base_path.display(), error = %e, "cannot create export directory");
            StorageError::directory_unavailable(self.base_path.display().to_string())
        })
    }
}

#[async_trait]
impl ReportFileStorage for LocalReportStorage {
    async fn save(&self, report: &ExportedReport) -> Result<SavedFile, StorageError> {
        Self::check_filename(&report.filename)?;
        self.ensure_dir().await?;

        let temp_path = self.temp_path(&report.filename);
        let final_path = self.file_path(&report.filename);

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(&report.content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            )));
        }

        tracing::debug!(path = %final_path.display(), bytes = report.content.len(), "report saved");
        Ok(SavedFile::new(final_path, report.content.len() as u64))
    }

    fn file_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use tempfile::TempDir;

    fn exported(filename: &str, content: &str) -> ExportedReport {
        ExportedReport {
            content: content.as_bytes().to_vec(),
            content_type: ExportFormat::Markdown.content_type().to_string(),
            filename: filename.to_string(),
            format: ExportFormat::Markdown,
        }
    }

    #[tokio::test]
    async fn save_writes_file_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(dir.path());

        let saved = storage
            .save(&exported("人生参照系_报告_1995-06-15.md", "# 人生参照报告"))
            .await
            .unwrap();

        assert_eq!(saved.size_bytes, "# 人生参照报告".len() as u64);
        let content = tokio::fs::read_to_string(saved.as_path()).await.unwrap();
        assert_eq!(content, "# 人生参照报告");
        assert!(!storage.temp_path("人生参照系_报告_1995-06-15.md").exists());
    }

    #[tokio::test]
    async fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("reports").join("2024");
        let storage = LocalReportStorage::new(&nested);

        storage.save(&exported("r.md", "x")).await.unwrap();
        assert!(nested.join("r.md").exists());
    }

    #[tokio::test]
    async fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(dir.path());

        storage.save(&exported("r.json", "{\"v\":1}")).await.unwrap();
        storage.save(&exported("r.json", "{\"v\":2}")).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("r.json")).unwrap();
        assert_eq!(content, "{\"v\":2}");
    }

    #[tokio::test]
    async fn save_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(dir.path());

        for name in ["../escape.md", "sub/dir.md", ""] {
            let result = storage.save(&exported(name, "x")).await;
            assert!(
                matches!(result, Err(StorageError::InvalidFilename { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn file_path_joins_base() {
        let storage = LocalReportStorage::new("/var/reports");
        assert_eq!(storage.file_path("a.md"), PathBuf::from("/var/reports/a.md"));
    }
}
