//! Email presence and shape check.

use std::sync::OnceLock;

use regex::Regex;
use tabman_model::ImportIssue;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// `local@domain.tld` with no whitespace and exactly one `@` before the dot
/// part.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

pub fn check(row: usize, email: &str) -> Option<ImportIssue> {
    if email.is_empty() {
        return Some(ImportIssue::new(row, "email", "Email is required"));
    }
    if !is_valid_email(email) {
        return Some(ImportIssue::new(row, "email", "Invalid email format"));
    }
    None
}
