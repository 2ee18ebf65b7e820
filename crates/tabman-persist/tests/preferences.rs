use tabman_model::{ColumnDef, ColumnType, Theme, default_columns};
use tabman_persist::{
    CURRENT_SCHEMA_VERSION, Preferences, load_preferences, load_preferences_async,
    save_preferences, save_preferences_async,
};
use tempfile::tempdir;

fn customized() -> Preferences {
    let mut columns = default_columns();
    columns[4].visible = true;
    columns.push(ColumnDef::from_label("Cost Center", ColumnType::Number).unwrap());
    Preferences::new(columns, Theme::Dark)
}

#[test]
fn save_then_load_restores_columns_and_theme() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".tabman").join("preferences.json");

    let mut prefs = customized();
    save_preferences(&mut prefs, &path).unwrap();
    let loaded = load_preferences(&path).unwrap();

    assert_eq!(loaded, prefs);
    assert_eq!(loaded.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(loaded.columns.last().unwrap().id.as_str(), "costcenter");
    assert_eq!(loaded.theme, Theme::Dark);
}

#[test]
fn saving_twice_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    save_preferences(&mut customized(), &path).unwrap();
    save_preferences(&mut Preferences::default(), &path).unwrap();

    assert_eq!(load_preferences(&path).unwrap().theme, Theme::Light);
}

#[tokio::test]
async fn async_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let saved = save_preferences_async(customized(), path.clone()).await.unwrap();
    let loaded = load_preferences_async(path).await.unwrap();
    assert_eq!(loaded, saved);
}
