use crate::{
    ActionOutcome, ActionRequest, DescriptorStore, EngineSettings, MediaAction, ToggleMode,
    tests::fakes::{KeyEvent, harness},
};

use std::time::Duration;

use enigo::Key;

/// WHAT: Media requests click exactly one key
/// WHY: Volume and playback controls are single presses
#[test]
fn given_media_action_when_dispatching_then_key_clicked() {
    // Given: An engine with no descriptors
    let mut h = harness("[]", "[]");

    // When: Raising the volume
    let outcome = h.engine.dispatch(ActionRequest::Media(MediaAction::VolumeUp));

    // Then: One click of the volume key
    assert_eq!(outcome, ActionOutcome::Success);
    assert_eq!(h.injector.events(), vec![KeyEvent::Click(Key::VolumeUp)]);
}

/// WHAT: Injection failures become failure outcomes
/// WHY: No OS fault may escape the engine
#[test]
fn given_injection_fails_when_dispatching_media_then_failure_outcome() {
    // Given: Broken keyboard injection
    let mut h = harness("[]", "[]");
    h.injector.fail();

    // When: Dispatching a media key
    let outcome = h.engine.dispatch(ActionRequest::Media(MediaAction::PlayPause));

    // Then: A failure carrying the cause
    assert!(matches!(outcome, ActionOutcome::Failure(ref msg) if msg.contains("input blocked")));
}

/// WHAT: Unknown combo keys are reported as not found
/// WHY: Every request gets exactly one reply
#[test]
fn given_unknown_combo_when_dispatching_then_not_found() {
    // Given: An empty store
    let mut h = harness("[]", "[]");

    // When: Dispatching a missing combo
    let outcome = h.engine.dispatch(ActionRequest::Combo("nope".to_string()));

    // Then: NotFound naming the key
    assert_eq!(outcome, ActionOutcome::NotFound("nope".to_string()));
}

/// WHAT: Reload swaps the store and resets toggle state
/// WHY: Edited descriptor files take effect without stale show/minimise state
#[test]
#[allow(clippy::unwrap_used)]
fn given_toggled_app_when_reloading_then_store_replaced_and_toggles_cleared() {
    // Given: A toggled notepad
    let mut h = harness(r#"[{"key": "notepad", "path": "notepad.exe"}]"#, "[]");
    h.engine.dispatch(ActionRequest::App("notepad".to_string()));
    assert_eq!(h.engine.toggle_mode("notepad"), ToggleMode::Shown);

    // When: Reloading with a different store
    let store = DescriptorStore::from_json(
        r#"[{"key": "notepad", "path": "notepad.exe"}, {"key": "calc", "path": "calc.exe"}]"#,
        "[]",
    )
    .unwrap();
    let outcome = h.engine.dispatch(ActionRequest::Reload(store));

    // Then: New store in place, toggle back to the default
    assert!(matches!(outcome, ActionOutcome::Text(ref text) if text.contains("2 apps")));
    assert!(h.engine.store().app("calc").is_some());
    assert_eq!(h.engine.toggle_mode("notepad"), ToggleMode::Minimized);
}

/// WHAT: Default settings carry the documented delays
/// WHY: Layout changes and clip finalisation need time on real hosts
#[test]
fn given_base_dir_when_creating_settings_then_defaults_applied() {
    // Given/When: Settings for a base directory
    let settings = EngineSettings::new("descriptors");

    // Then: Default delays and limits
    assert_eq!(settings.layout_settle, Duration::from_millis(100));
    assert_eq!(settings.recording.settle_delay, Duration::from_secs(2));
    assert_eq!(settings.recording.max_clip_bytes, 2000 * 1024 * 1024);
    assert_eq!(settings.search.preferred_browser_key, None);
}

/// WHAT: Outcomes render as one reply line each
/// WHY: The transport shows the rendered text verbatim
#[test]
fn given_outcomes_when_displaying_then_reply_text() {
    assert_eq!(ActionOutcome::Success.to_string(), "done");
    assert_eq!(ActionOutcome::NotFound("x".to_string()).to_string(), "not found: x");
    assert_eq!(ActionOutcome::Failure("boom".to_string()).to_string(), "error: boom");
    assert!(!ActionOutcome::Failure("boom".to_string()).is_success());
}
