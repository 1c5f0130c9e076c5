use crate::{ComboAction, CoreError, DescriptorStore, Layout};

/// WHAT: `args` and `arg` both populate the argument list
/// WHY: Older descriptor files spell the field `arg` and use a bare string
#[test]
#[allow(clippy::unwrap_used)]
fn given_arg_alias_when_loading_then_args_normalised() {
    // Given: One app with `args` as a list and one with `arg` as a string
    let apps = r#"[
        {"key": "a", "path": "a.exe", "args": ["--one", "--two"]},
        {"key": "b", "path": "b.exe", "arg": "--solo"}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, "[]").unwrap();

    // Then: Both forms end up in `args`
    assert_eq!(store.app("a").unwrap().args, vec!["--one", "--two"]);
    assert_eq!(store.app("b").unwrap().args, vec!["--solo"]);
}

/// WHAT: Missing `exe` defaults to the last path segment
/// WHY: Window matching needs an image-name hint for every toggled app
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_exe_when_loading_then_last_path_segment_used() {
    // Given: Paths with either separator and one explicit hint
    let apps = r#"[
        {"key": "win", "path": "C:\\Tools\\Far\\far.exe"},
        {"key": "unix", "path": "/opt/tool/bin/tool"},
        {"key": "explicit", "path": "launcher.exe", "exe": "game.exe"}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, "[]").unwrap();

    // Then: Hints come from the path unless set explicitly
    assert_eq!(store.app("win").unwrap().exe, "far.exe");
    assert_eq!(store.app("unix").unwrap().exe, "tool");
    assert_eq!(store.app("explicit").unwrap().exe, "game.exe");
}

/// WHAT: `is_app` accepts y/n strings and bools, defaulting to true
/// WHY: Descriptor files written by hand use all three spellings
#[test]
#[allow(clippy::unwrap_used)]
fn given_is_app_spellings_when_loading_then_flag_parsed() {
    // Given: Each spelling of the flag
    let apps = r#"[
        {"key": "yes", "path": "a.exe", "is_app": "y"},
        {"key": "no", "path": "b.exe", "is_app": "N"},
        {"key": "bool", "path": "c.exe", "is_app": false},
        {"key": "default", "path": "d.exe"}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, "[]").unwrap();

    // Then: Only explicit negatives turn toggling off
    assert!(store.app("yes").unwrap().is_app);
    assert!(!store.app("no").unwrap().is_app);
    assert!(!store.app("bool").unwrap().is_app);
    assert!(store.app("default").unwrap().is_app);
}

/// WHAT: Numeric and string steam ids are accepted; blanks are ignored
/// WHY: The id is copied from store pages in either form
#[test]
#[allow(clippy::unwrap_used)]
fn given_steam_ids_when_loading_then_normalised_to_strings() {
    // Given: Numeric, string and blank ids
    let apps = r#"[
        {"key": "num", "steam_appid": 570},
        {"key": "text", "steam_appid": " 730 "},
        {"key": "blank", "path": "x.exe", "steam_appid": ""}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, "[]").unwrap();

    // Then: Ids are trimmed strings, blanks become None
    assert_eq!(store.app("num").unwrap().steam_appid.as_deref(), Some("570"));
    assert_eq!(store.app("text").unwrap().steam_appid.as_deref(), Some("730"));
    assert_eq!(store.app("blank").unwrap().steam_appid, None);
}

/// WHAT: Invalid records are skipped without failing the load
/// WHY: One broken entry must not take the whole menu down
#[test]
#[allow(clippy::unwrap_used)]
fn given_invalid_records_when_loading_then_skipped() {
    // Given: An app without key, an app without path, a bad layout and an unknown type
    let apps = r#"[
        {"name": "nameless", "path": "a.exe"},
        {"key": "pathless"},
        {"key": "ok", "path": "ok.exe"}
    ]"#;
    let combos = r#"[
        {"key": "bad_layout", "keys": ["a"], "layout": "de"},
        {"key": "bad_type", "type": "macro"},
        {"key": "batch_without_path", "type": "batch"},
        {"key": "copy", "keys": ["ctrl", "c"]}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, combos).unwrap();

    // Then: Only the valid records remain
    assert_eq!(store.apps().len(), 1);
    assert!(store.app("ok").is_some());
    assert_eq!(store.combos().len(), 1);
    assert!(store.combo("copy").is_some());
}

/// WHAT: Duplicate keys keep the first record
/// WHY: A key must identify at most one descriptor
#[test]
#[allow(clippy::unwrap_used)]
fn given_duplicate_keys_when_loading_then_first_wins() {
    // Given: Two apps sharing a key
    let apps = r#"[
        {"key": "dup", "name": "First", "path": "first.exe"},
        {"key": "dup", "name": "Second", "path": "second.exe"}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, "[]").unwrap();

    // Then: The first record is kept
    assert_eq!(store.apps().len(), 1);
    assert_eq!(store.app("dup").unwrap().name, "First");
}

/// WHAT: Combo `type` selects the action and overrides `keys`
/// WHY: Alternate modes must bypass key sending entirely
#[test]
#[allow(clippy::unwrap_used)]
fn given_combo_types_when_loading_then_actions_tagged() {
    // Given: One combo of each kind, the batch one also listing keys
    let combos = r#"[
        {"key": "keys", "keys": ["alt", "tab"], "layout": "ru"},
        {"key": "plain", "keys": ["f5"], "layout": "none"},
        {"key": "script", "type": "batch", "path": "backup.bat", "keys": ["a"]},
        {"key": "browser", "type": "set_search_browser", "target_browser_key": "firefox"},
        {"key": "screen_rec", "name": "Record"}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json("[]", combos).unwrap();

    // Then: Each combo carries the matching action
    assert_eq!(
        store.combo("keys").unwrap().action,
        ComboAction::Keys {
            keys: vec!["alt".to_string(), "tab".to_string()],
            layout: Some(Layout::Ru),
        }
    );
    assert_eq!(
        store.combo("plain").unwrap().action,
        ComboAction::Keys {
            keys: vec!["f5".to_string()],
            layout: None,
        }
    );
    assert_eq!(
        store.combo("script").unwrap().action,
        ComboAction::Batch {
            path: "backup.bat".to_string()
        }
    );
    assert_eq!(
        store.combo("browser").unwrap().action,
        ComboAction::SetSearchBrowser {
            target_browser_key: "firefox".to_string()
        }
    );
    assert_eq!(store.combo("screen_rec").unwrap().action, ComboAction::ScreenRecord);
}

/// WHAT: Hidden descriptors stay resolvable but leave the menu
/// WHY: `show_in_menu` only affects presentation
#[test]
#[allow(clippy::unwrap_used)]
fn given_hidden_descriptor_when_listing_menu_then_excluded_but_resolvable() {
    // Given: A visible and a hidden app
    let apps = r#"[
        {"key": "shown", "path": "a.exe"},
        {"key": "hidden", "path": "b.exe", "show_in_menu": false}
    ]"#;

    // When: Loading the store and listing the menu
    let store = DescriptorStore::from_json(apps, "[]").unwrap();
    let menu: Vec<&str> = store.menu_apps().map(|app| app.key.as_str()).collect();

    // Then: Menu excludes the hidden app while lookup still finds it
    assert_eq!(menu, vec!["shown"]);
    assert!(store.app("hidden").is_some());
}

/// WHAT: A document that is not a JSON array fails the load
/// WHY: A corrupt file must be reported, not silently treated as empty
#[test]
fn given_malformed_json_when_loading_then_json_error() {
    // Given: A JSON object where an array is expected
    let apps = r#"{"key": "a"}"#;

    // When: Loading the store
    let result = DescriptorStore::from_json(apps, "[]");

    // Then: Returns a Json error
    assert!(matches!(result, Err(CoreError::Json { .. })));
}

/// WHAT: A record with a mistyped field is skipped, its siblings are kept
/// WHY: One hand-edited typo must not empty the whole menu
#[test]
#[allow(clippy::unwrap_used)]
fn given_mistyped_field_in_one_record_when_loading_then_others_kept() {
    // Given: A string where a bool is expected, and a number in a key list
    let apps = r#"[
        {"key": "a", "path": "a.exe"},
        {"key": "b", "path": "b.exe", "show_in_menu": "false"}
    ]"#;
    let combos = r#"[
        {"key": "bad", "keys": ["f", 5]},
        {"key": "copy", "keys": ["ctrl", "c"]}
    ]"#;

    // When: Loading the store
    let store = DescriptorStore::from_json(apps, combos).unwrap();

    // Then: Only the well-typed records survive
    assert!(store.app("a").is_some());
    assert!(store.app("b").is_none());
    assert!(store.combo("copy").is_some());
    assert!(store.combo("bad").is_none());
}
