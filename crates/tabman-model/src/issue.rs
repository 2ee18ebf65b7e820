use std::fmt;

use serde::{Deserialize, Serialize};

/// Field name used for file-level import failures.
pub const FILE_FIELD: &str = "file";

/// Message reported when the CSV text cannot be parsed at all.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse CSV file. Please check the format.";

/// A problem found while importing one CSV row.
///
/// `row` is 1-indexed over data rows. Row 0 is reserved for file-level
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportIssue {
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl ImportIssue {
    pub fn new(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn parse_failure() -> Self {
        Self::new(0, FILE_FIELD, PARSE_FAILURE_MESSAGE)
    }

    pub fn is_file_level(&self) -> bool {
        self.row == 0
    }
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {} (field: {})", self.row, self.message, self.field)
    }
}
