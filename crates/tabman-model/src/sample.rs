use crate::{Record, RecordId};

fn id(value: &'static str) -> RecordId {
    RecordId::builtin(value)
}

/// The five demo records a fresh table is seeded with.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(id("1"), "John Doe", "john.doe@example.com", 28, "Developer")
            .with_department("Engineering")
            .with_location("New York"),
        Record::new(id("2"), "Jane Smith", "jane.smith@example.com", 32, "Designer")
            .with_department("Design")
            .with_location("San Francisco"),
        Record::new(id("3"), "Bob Johnson", "bob.johnson@example.com", 45, "Manager")
            .with_department("Engineering")
            .with_location("Chicago"),
        Record::new(id("4"), "Alice Brown", "alice.brown@example.com", 26, "Analyst")
            .with_department("Data")
            .with_location("Boston"),
        Record::new(id("5"), "Charlie Wilson", "charlie.wilson@example.com", 35, "Developer")
            .with_department("Engineering")
            .with_location("Seattle"),
    ]
}
