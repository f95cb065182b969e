//! Profile file loader.
//!
//! Reads a `UserProfile` from a YAML or JSON file for the non-interactive
//! `report` command. Files are only read, never written back.
//!
//! ```yaml
//! birth_date: 1995-06-15
//! milestones:
//!   EMOTION:
//!     - { age_range: "21-25", status_code: first_love }
//!   CAREER:
//!     - { age_range: "21-25", status_code: first_job }
//! ```

use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::domain::profile::UserProfile;

/// Errors that can occur while loading a profile file.
#[derive(Debug, Error)]
pub enum ProfileFileError {
    #[error("Profile file not found: {0}")]
    NotFound(String),

    #[error("Cannot read profile file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported profile file extension: {0} (expected .yaml, .yml or .json)")]
    UnsupportedExtension(String),

    #[error("Invalid profile in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Serialization format of a profile file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Yaml,
    Json,
}

impl ProfileFormat {
    pub fn from_path(path: &Path) -> Result<Self, ProfileFileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ProfileFileError::UnsupportedExtension(
                path.display().to_string(),
            )),
        }
    }
}

/// Parses profile text in the given format.
pub fn parse_profile(
    content: &str,
    format: ProfileFormat,
    origin: &str,
) -> Result<UserProfile, ProfileFileError> {
    let parsed = match format {
        ProfileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        ProfileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ProfileFileError::Parse {
        path: origin.to_string(),
        message,
    })
}

/// Loads a profile from disk.
pub async fn load_profile(path: impl AsRef<Path>) -> Result<UserProfile, ProfileFileError> {
    let path = path.as_ref();
    let format = ProfileFormat::from_path(path)?;
    let origin = path.display().to_string();

    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ProfileFileError::NotFound(origin.clone()),
        _ => ProfileFileError::Io {
            path: origin.clone(),
            message: e.to_string(),
        },
    })?;

    let profile = parse_profile(&content, format, &origin)?;
    tracing::debug!(
        path = %origin,
        milestones = profile.milestone_count(),
        "profile loaded"
    );
    Ok(profile)
}
