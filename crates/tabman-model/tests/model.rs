use tabman_model::{
    ColumnDef, ColumnId, ColumnType, ImportIssue, Record, RecordId, SortDirection, Theme,
    ViewCriteria, default_columns, sample_records,
};

#[test]
fn column_defs_round_trip_through_json() {
    let mut columns = default_columns();
    columns.push(ColumnDef::from_label("Start Date", ColumnType::String).unwrap());

    let json = serde_json::to_string(&columns).expect("serialize columns");
    let round: Vec<ColumnDef> = serde_json::from_str(&json).expect("deserialize columns");
    assert_eq!(round, columns);
    assert_eq!(round.last().map(|c| c.id.as_str()), Some("startdate"));
}

#[test]
fn column_def_missing_required_defaults_false() {
    let json = r#"{"id":"team","label":"Team","visible":false,"type":"string"}"#;
    let column: ColumnDef = serde_json::from_str(json).expect("deserialize column");
    assert!(!column.required);
    assert!(!column.visible);
}

#[test]
fn blank_column_id_is_rejected_on_deserialize() {
    let json = r#"{"id":"  ","label":"Blank","visible":true,"type":"string"}"#;
    assert!(serde_json::from_str::<ColumnDef>(json).is_err());
}

#[test]
fn criteria_serialize_directions_in_lowercase() {
    let criteria = ViewCriteria::default()
        .with_search("dev")
        .with_sort(ColumnId::new("age").unwrap(), SortDirection::Desc);
    let json = serde_json::to_value(&criteria).expect("serialize criteria");
    assert_eq!(json["sort_direction"], "desc");
    assert_eq!(json["sort_field"], "age");
    assert_eq!(json["rows_per_page"], 10);
}

#[test]
fn theme_serializes_in_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}

#[test]
fn sample_records_have_unique_ids_and_optionals() {
    let records = sample_records();
    let mut ids: Vec<&RecordId> = records.iter().map(|r| &r.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
    assert!(records.iter().all(|r| r.department.is_some() && r.location.is_some()));
}

#[test]
fn record_custom_values_survive_json() {
    let record = Record::new(RecordId::new("9").unwrap(), "Ann", "ann@x.io", 40, "Lead")
        .with_custom("team", "Infra");
    let json = serde_json::to_string(&record).unwrap();
    let round: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(round, record);
}

#[test]
fn import_issue_serializes_flat() {
    let issue = ImportIssue::new(1, "name", "Name is required");
    let json = serde_json::to_value(&issue).unwrap();
    assert_eq!(json["row"], 1);
    assert_eq!(json["field"], "name");
    assert_eq!(json["message"], "Name is required");
}
