use tabman_core::{ActionOutcome, TableAction, TableConfig, TableState};
use tabman_ingest::import_csv_async;
use tabman_model::{ColumnId, SortDirection, sample_records};

fn ages(state: &TableState) -> Vec<i64> {
    state.view().iter().map(|r| r.age).collect()
}

#[test]
fn sample_ages_sort_both_directions() {
    let mut state = TableState::default().with_records(sample_records());
    let age = ColumnId::new("age").unwrap();

    state.sort(age.clone(), SortDirection::Asc);
    assert_eq!(ages(&state), vec![26, 28, 32, 35, 45]);

    state.sort(age, SortDirection::Desc);
    assert_eq!(ages(&state), vec![45, 35, 32, 28, 26]);
}

#[test]
fn paging_uses_configured_rows() {
    let config = TableConfig::default().with_rows_per_page(2);
    let state = TableState::new(config).unwrap().with_records(sample_records());
    assert_eq!(state.page_rows().len(), 2);
    assert_eq!(state.page_count(), 3);
}

#[test]
fn zero_rows_config_is_rejected() {
    assert!(TableState::new(TableConfig::default().with_rows_per_page(0)).is_err());
}

#[test]
fn export_then_import_keeps_values() {
    let mut state = TableState::default().with_records(sample_records());
    let csv = state.export_csv().unwrap();

    let mut other = TableState::default();
    assert_eq!(other.import_csv(&csv), Ok(5));
    for (before, after) in state.records().iter().zip(other.records()) {
        assert_eq!(before.name, after.name);
        assert_eq!(before.email, after.email);
        assert_eq!(before.age, after.age);
        assert_eq!(before.role, after.role);
        assert_ne!(before.id, after.id);
    }

    state.search("nothing matches this");
    assert_eq!(state.export_csv().unwrap().lines().count(), 1);
}

#[tokio::test]
async fn async_import_is_applied_after_await() {
    let mut state = TableState::default().with_records(sample_records());
    let outcome = import_csv_async("Name,Email,Age,Role\nAda,ada@x.io,36,Engineer\n".into()).await;
    assert_eq!(state.apply_import(outcome), Ok(1));
    assert_eq!(state.view()[0].name, "Ada");
}

#[test]
fn replayed_script_reports_outcomes() {
    let script = r#"[
        {"action": "add_column", "label": " Location "},
        {"action": "add_column", "label": "Team", "type": "string"},
        {"action": "toggle_column_visibility", "id": "department"},
        {"action": "export_csv"}
    ]"#;
    let actions: Vec<TableAction> = serde_json::from_str(script).unwrap();
    let mut state = TableState::default().with_records(sample_records());
    let outcomes = state.dispatch_all(actions).unwrap();

    assert_eq!(outcomes[0], ActionOutcome::Ignored);
    assert_eq!(outcomes[1], ActionOutcome::Applied);
    assert_eq!(outcomes[2], ActionOutcome::Applied);
    match &outcomes[3] {
        ActionOutcome::Exported { csv } => {
            assert!(csv.starts_with("Name,Email,Age,Role,Department,Team"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}
