//! Row validation for CSV imports.
//!
//! Every candidate row is checked independently and all issues are
//! collected. Nothing short-circuits: a row with an empty name and a bad
//! email reports both.

mod checks;

use serde::Serialize;
use tracing::debug;

use tabman_model::{ImportIssue, Record};

pub use checks::is_valid_email;

/// Validate one candidate. `row` is the 1-based data row number.
pub fn validate_record(row: usize, record: &Record) -> Vec<ImportIssue> {
    checks::run_all(row, record)
}

/// Issues collected over a whole import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub rows_checked: usize,
    pub issues: Vec<ImportIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }

    /// Issues for one data row, in check order.
    pub fn issues_for_row(&self, row: usize) -> impl Iterator<Item = &ImportIssue> {
        self.issues.iter().filter(move |issue| issue.row == row)
    }

    /// Number of distinct rows with at least one issue.
    pub fn failing_rows(&self) -> usize {
        let mut rows: Vec<usize> = self.issues.iter().map(|issue| issue.row).collect();
        rows.dedup();
        rows.len()
    }
}

/// Validate candidates in order, numbering rows from 1.
pub fn validate_records(records: &[Record]) -> ValidationReport {
    let mut report = ValidationReport {
        rows_checked: records.len(),
        issues: Vec::new(),
    };
    for (idx, record) in records.iter().enumerate() {
        report.issues.extend(validate_record(idx + 1, record));
    }
    debug!(
        rows = report.rows_checked,
        issues = report.issues.len(),
        "validated import candidates"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabman_model::RecordId;

    fn candidate(name: &str, email: &str, age: i64, role: &str) -> Record {
        Record::new(RecordId::new("c").unwrap(), name, email, age, role)
    }

    #[test]
    fn valid_row_has_no_issues() {
        assert!(validate_record(1, &candidate("Ann", "ann@x.io", 30, "Dev")).is_empty());
    }

    #[test]
    fn every_defect_is_reported_in_field_order() {
        let issues = validate_record(4, &candidate("", "", 0, ""));
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "age", "role"]);
        assert!(issues.iter().all(|i| i.row == 4));
        assert_eq!(issues[2].message, "Age must be a positive number");
    }

    #[test]
    fn negative_age_is_rejected() {
        let issues = validate_record(1, &candidate("Ann", "ann@x.io", -3, "Dev"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "age");
    }

    #[test]
    fn report_counts_failing_rows() {
        let report = validate_records(&[
            candidate("Ann", "ann@x.io", 30, "Dev"),
            candidate("", "bad", 30, "Dev"),
            candidate("Bo", "bo@x.io", 0, "Ops"),
        ]);
        assert_eq!(report.rows_checked, 3);
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.failing_rows(), 2);
        assert_eq!(report.issues_for_row(2).count(), 2);
        assert_eq!(report.issues_for_row(1).count(), 0);
    }
}
