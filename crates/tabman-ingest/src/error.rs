//! Error types for CSV import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing CSV files.
///
/// Row-level import problems are not errors: they come back as
/// [`ImportIssue`](tabman_model::ImportIssue)s inside an
/// [`ImportOutcome`](crate::ImportOutcome).
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize rows.
    #[error("failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    /// Serialized CSV was not valid UTF-8.
    #[error("exported CSV is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
