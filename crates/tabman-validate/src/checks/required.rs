//! Presence checks for required text fields.

use tabman_model::ImportIssue;

/// Flag an empty value. Whitespace counts as present.
pub fn check(row: usize, field: &str, value: &str, message: &str) -> Option<ImportIssue> {
    value
        .is_empty()
        .then(|| ImportIssue::new(row, field, message))
}
