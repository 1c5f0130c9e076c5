use crate::{config::PathsConfig, load_descriptors};

use std::fs;

/// WHAT: Both descriptor files load into one store
/// WHY: Startup and reload read the same files
#[test]
#[allow(clippy::unwrap_used)]
fn given_descriptor_files_when_loading_then_store_filled() {
    // Given: apps.json and combos.json in the base directory
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("apps.json"),
        r#"[{"key": "notepad", "name": "Notepad", "path": "notepad.exe"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("combos.json"),
        r#"[{"key": "desk", "name": "Desktop", "keys": ["win", "d"]}]"#,
    )
    .unwrap();

    // When: Loading
    let store = load_descriptors(&PathsConfig::new(dir.path())).unwrap();

    // Then: Both descriptors present
    assert!(store.app("notepad").is_some());
    assert!(store.combo("desk").is_some());
}

/// WHAT: Missing descriptor files load as empty lists
/// WHY: A fresh install has no descriptors yet and must still start
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_files_when_loading_then_empty_store() {
    // Given: An empty base directory
    let dir = tempfile::tempdir().unwrap();

    // When: Loading
    let store = load_descriptors(&PathsConfig::new(dir.path())).unwrap();

    // Then: Nothing loaded, no error
    assert!(store.apps().is_empty());
    assert!(store.combos().is_empty());
}

/// WHAT: Absolute descriptor paths ignore the base directory
/// WHY: Descriptor files may live outside the config directory
#[test]
#[allow(clippy::unwrap_used)]
fn given_absolute_apps_file_when_loading_then_read_from_there() {
    // Given: apps.json elsewhere, named absolutely
    let base = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let apps = elsewhere.path().join("my-apps.json");
    fs::write(&apps, r#"[{"key": "calc", "path": "calc.exe"}]"#).unwrap();
    let mut paths = PathsConfig::new(base.path());
    paths.apps_file = apps;

    // When: Loading
    let store = load_descriptors(&paths).unwrap();

    // Then: Read from the absolute path
    assert!(store.app("calc").is_some());
}

/// WHAT: Malformed JSON is an error
/// WHY: A broken file must not silently empty the menu on reload
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_json_when_loading_then_error() {
    // Given: A truncated apps.json
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("apps.json"), r#"[{"key": "#).unwrap();

    // When: Loading
    let result = load_descriptors(&PathsConfig::new(dir.path()));

    // Then: Error
    assert!(result.is_err());
}
