//! Preference storage errors, with messages meant for the terminal.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    #[error("Failed to serialize preferences")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize preferences: {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The temp file was written but could not replace the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Background preference task failed: {0}")]
    Task(String),
}

impl PersistError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::UnsupportedVersion {
                found,
                max_supported,
                path,
            } => format!(
                "The preferences at {} were written by a newer tabman \
                 (file version {found}, this build supports up to {max_supported}).",
                path.display()
            ),
            Self::Serialization { .. } => {
                "An error occurred while saving the preferences.".to_string()
            }
            Self::Deserialization { path, .. } => format!(
                "The preferences at {} could not be read. The file may be corrupted.",
                path.display()
            ),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the preferences to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::Task(_) => "The preference operation was interrupted.".to_string(),
        }
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::UnsupportedVersion { .. } => Some("Update tabman to the latest version.".into()),
            Self::Deserialization { .. } => {
                Some("Delete the file to start again from the default columns.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or pass a different --prefs path.".into())
            }
            Self::Serialization { .. } | Self::Task(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
