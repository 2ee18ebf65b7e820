use std::fs;

use proptest::prelude::*;

use tabman_ingest::{
    DEFAULT_EXPORT_FILE_NAME, export_csv, import_csv_bytes, import_csv_with, read_import_file,
    write_export,
};
use tabman_model::{Record, RecordId, RecordIdGenerator, default_columns, sample_records};

fn all_columns_visible() -> Vec<tabman_model::ColumnDef> {
    let mut columns = default_columns();
    for column in &mut columns {
        column.visible = true;
    }
    columns
}

fn same_fields(a: &Record, b: &Record) -> bool {
    a.name == b.name
        && a.email == b.email
        && a.age == b.age
        && a.role == b.role
        && a.department == b.department
        && a.location == b.location
}

#[test]
fn export_then_import_reproduces_sample_records() {
    let original = sample_records();
    let csv = export_csv(&original, &all_columns_visible()).expect("export");
    let mut ids = RecordIdGenerator::with_nonce("round-trip");
    let imported = import_csv_with(&csv, &mut ids).into_result().expect("import");

    assert_eq!(imported.len(), original.len());
    for (before, after) in original.iter().zip(&imported) {
        assert!(same_fields(before, after), "{before:?} != {after:?}");
        assert_ne!(before.id, after.id);
    }
}

#[test]
fn export_file_reads_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join(DEFAULT_EXPORT_FILE_NAME);
    let csv = export_csv(&sample_records(), &default_columns()).expect("export");
    write_export(&path, &csv).expect("write export");

    let bytes = read_import_file(&path).expect("read back");
    let outcome = import_csv_bytes(&bytes, &mut RecordIdGenerator::with_nonce("file"));
    assert_eq!(outcome.records().len(), 5);
    assert!(outcome.records().iter().all(|r| r.department.is_none()));
    assert_eq!(fs::read_to_string(&path).unwrap(), csv);
}

#[test]
fn missing_import_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_import_file(&dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

fn text_field() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,\"'.-]{0,15}"
}

proptest! {
    #[test]
    fn round_trip_preserves_valid_records(
        name in text_field(),
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        age in 1i64..120,
        role in text_field(),
        department in proptest::option::of(text_field()),
    ) {
        let mut record = Record::new(
            RecordId::new("p").unwrap(),
            name,
            format!("{local}@{domain}.com"),
            age,
            role,
        );
        record.department = department;

        let csv = export_csv([&record], &all_columns_visible()).unwrap();
        let imported = import_csv_with(&csv, &mut RecordIdGenerator::with_nonce("p"))
            .into_result()
            .unwrap();
        prop_assert_eq!(imported.len(), 1);
        prop_assert!(same_fields(&record, &imported[0]));
    }
}
