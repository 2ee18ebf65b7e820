//! Validation check modules.
//!
//! Each module checks one field of an import candidate. Checks run in field
//! order so issues for a row come out as name, email, age, role.

mod age;
mod email;
mod required;

use tabman_model::{ImportIssue, Record};

pub use email::is_valid_email;

/// Run every check against one candidate.
pub fn run_all(row: usize, record: &Record) -> Vec<ImportIssue> {
    let mut issues = Vec::new();

    // 1. Name must be present
    issues.extend(required::check(row, "name", &record.name, "Name is required"));

    // 2. Email must be present and well formed
    issues.extend(email::check(row, &record.email));

    // 3. Age must be positive
    issues.extend(age::check(row, record.age));

    // 4. Role must be present
    issues.extend(required::check(row, "role", &record.role, "Role is required"));

    issues
}
