//! Core types of the tabman table manager: records, column definitions,
//! view criteria and import issues.

pub mod column;
pub mod criteria;
pub mod error;
pub mod ids;
pub mod issue;
pub mod record;
pub mod sample;

pub use column::{ColumnDef, ColumnType, default_columns};
pub use criteria::{DEFAULT_ROWS_PER_PAGE, SortDirection, Theme, ViewCriteria};
pub use error::{ModelError, Result};
pub use ids::{ColumnId, RecordId, RecordIdGenerator};
pub use issue::{FILE_FIELD, ImportIssue, PARSE_FAILURE_MESSAGE};
pub use record::{FieldValue, RECORD_FIELDS, Record, parse_leading_int};
pub use sample::sample_records;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ages_match_demo_table() {
        let ages: Vec<i64> = sample_records().iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![28, 32, 45, 26, 35]);
    }

    #[test]
    fn parse_failure_issue_is_file_level() {
        let issue = ImportIssue::parse_failure();
        assert!(issue.is_file_level());
        assert_eq!(issue.field, FILE_FIELD);
        assert_eq!(issue.message, PARSE_FAILURE_MESSAGE);
        assert_eq!(
            issue.to_string(),
            "Row 0: Failed to parse CSV file. Please check the format. (field: file)"
        );
    }
}
