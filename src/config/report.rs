//! Report output configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::ExportFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory exported reports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: ExportFormat,

    /// How often the loading message changes while the summary is pending
    #[serde(default = "default_loading_interval_ms")]
    pub loading_interval_ms: u64,
}

impl ReportConfig {
    pub fn loading_interval(&self) -> Duration {
        Duration::from_millis(self.loading_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.loading_interval_ms < 100 {
            return Err(ValidationError::InvalidLoadingInterval);
        }
        if self.export_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("REPORT__EXPORT_DIR"));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            default_format: ExportFormat::default(),
            loading_interval_ms: default_loading_interval_ms(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_loading_interval_ms() -> u64 {
    2000
}
