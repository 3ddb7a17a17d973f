use super::*;
use tempfile::tempdir;

#[test]
fn write_default_settings_creates_parent_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.title, Settings::default().title);

    std::fs::write(&path, r#"{"title": "Mine"}"#).unwrap();
    write_default_settings(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().title, "Mine");
}

#[test]
fn malformed_settings_are_invalid_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
