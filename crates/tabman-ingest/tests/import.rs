use tabman_ingest::{ImportOutcome, import_csv, import_csv_async, import_csv_with};
use tabman_model::{ImportIssue, RecordIdGenerator};

fn ids() -> RecordIdGenerator {
    RecordIdGenerator::with_nonce("tests")
}

#[test]
fn empty_name_row_is_rejected_with_one_issue() {
    let csv = "Name,Email,Age,Role\n,a@b.com,30,Dev\n";
    let outcome = import_csv_with(csv, &mut ids());
    assert_eq!(
        outcome,
        ImportOutcome::Rejected {
            issues: vec![ImportIssue::new(1, "name", "Name is required")]
        }
    );
}

#[test]
fn one_invalid_row_rejects_every_row() {
    let mut csv = String::from("name,email,age,role\n");
    for i in 1..=5 {
        csv.push_str(&format!("User {i},user{i}@corp.com,{},Dev\n", 20 + i));
    }
    csv.push_str("Bad,bad@corp.com,-1,Dev\n");

    let outcome = import_csv_with(&csv, &mut ids());
    assert!(!outcome.is_accepted());
    assert!(outcome.records().is_empty());
    assert_eq!(
        outcome.issues(),
        &[ImportIssue::new(6, "age", "Age must be a positive number")]
    );
}

#[test]
fn issues_from_all_rows_are_collected() {
    let csv = "Name,Email,Age,Role\n,,0,\nBo,not-an-email,22,Ops\n";
    let outcome = import_csv_with(csv, &mut ids());
    insta::assert_json_snapshot!(outcome.issues(), @r#"
    [
      {
        "row": 1,
        "field": "name",
        "message": "Name is required"
      },
      {
        "row": 1,
        "field": "email",
        "message": "Email is required"
      },
      {
        "row": 1,
        "field": "age",
        "message": "Age must be a positive number"
      },
      {
        "row": 1,
        "field": "role",
        "message": "Role is required"
      },
      {
        "row": 2,
        "field": "email",
        "message": "Invalid email format"
      }
    ]
    "#);
}

#[test]
fn blank_lines_do_not_shift_row_numbers() {
    let csv = "Name,Email,Age,Role\n\nAnn,ann@x.io,30,Dev\n\n,bo@x.io,22,Ops\n";
    let issues = import_csv_with(csv, &mut ids()).into_result().unwrap_err();
    assert_eq!(issues, vec![ImportIssue::new(2, "name", "Name is required")]);
}

#[test]
fn header_only_file_imports_nothing() {
    let outcome = import_csv("Name,Email,Age,Role\n");
    assert_eq!(outcome, ImportOutcome::Accepted { records: vec![] });
}

#[test]
fn optional_fields_are_read_from_either_spelling() {
    let csv = "Name,Email,Age,Role,department,Location\nAnn,ann@x.io,30,Dev,Ops,Oslo\n";
    let records = import_csv_with(csv, &mut ids()).into_result().unwrap();
    assert_eq!(records[0].department.as_deref(), Some("Ops"));
    assert_eq!(records[0].location.as_deref(), Some("Oslo"));
}

#[tokio::test]
async fn async_import_matches_sync_validation() {
    let outcome = import_csv_async("Name,Email,Age,Role\nAnn,ann@x.io,30,Dev\n".to_string()).await;
    assert!(outcome.is_accepted());
    assert_eq!(outcome.records()[0].name, "Ann");

    let rejected = import_csv_async("Name,Email,Age,Role\nAnn,ann,30,Dev\n".to_string()).await;
    assert_eq!(
        rejected.issues(),
        &[ImportIssue::new(1, "email", "Invalid email format")]
    );
}
