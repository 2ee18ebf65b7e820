use tabman_model::ImportIssue;

pub const AGE_MESSAGE: &str = "Age must be a positive number";

/// Age must be greater than zero. Unparseable input has already become 0.
pub fn check(row: usize, age: i64) -> Option<ImportIssue> {
    (age <= 0).then(|| ImportIssue::new(row, "age", AGE_MESSAGE))
}
