//! Logical key names used in combo descriptors.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use enigo::Key;
use error_location::ErrorLocation;

/// Parse one logical key name, e.g. `ctrl`, `page up`, `f5`, `a`.
pub(crate) fn parse_key(name: &str) -> Option<Key> {
    let lowered = name.trim().to_lowercase();
    let normalized = if lowered.chars().count() > 1 {
        lowered.replace(['_', '-'], " ")
    } else {
        lowered
    };

    let key = match normalized.as_str() {
        "ctrl" | "control" | "ctrl left" | "left ctrl" => Key::Control,
        "alt" | "alt left" | "left alt" | "option" => Key::Alt,
        "shift" | "shift left" | "left shift" => Key::Shift,
        "win" | "winleft" | "win left" | "left windows" | "windows" | "super" | "cmd"
        | "command" | "meta" => Key::Meta,
        "enter" | "return" => Key::Return,
        "esc" | "escape" => Key::Escape,
        "tab" => Key::Tab,
        "space" | "spacebar" => Key::Space,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "up" | "arrow up" => Key::UpArrow,
        "down" | "arrow down" => Key::DownArrow,
        "left" | "arrow left" => Key::LeftArrow,
        "right" | "arrow right" => Key::RightArrow,
        "page up" | "pageup" | "pgup" => Key::PageUp,
        "page down" | "pagedown" | "pgdn" => Key::PageDown,
        "home" => Key::Home,
        "end" => Key::End,
        "caps lock" | "capslock" => Key::CapsLock,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "volume up" | "volumeup" => Key::VolumeUp,
        "volume down" | "volumedown" => Key::VolumeDown,
        "volume mute" | "volumemute" | "mute" => Key::VolumeMute,
        "play pause" | "playpause" | "play/pause" => Key::MediaPlayPause,
        "next track" | "nexttrack" => Key::MediaNextTrack,
        "prev track" | "previous track" | "prevtrack" => Key::MediaPrevTrack,
        "plus" => Key::Unicode('+'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Unicode(c),
                _ => return None,
            }
        }
    };

    Some(key)
}

/// Parse a combo's key list, failing on the first unknown name.
#[track_caller]
pub(crate) fn parse_keys(names: &[String]) -> CoreResult<Vec<Key>> {
    names
        .iter()
        .map(|name| {
            parse_key(name).ok_or_else(|| CoreError::KeyInjectionFailure {
                reason: format!("unknown key name {name:?}"),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .collect()
}

/// Whether `name` is the platform ("Windows"/super) modifier.
pub(crate) fn is_super(name: &str) -> bool {
    parse_key(name) == Some(Key::Meta)
}

/// A bare press or release of a modifier, spelled `<modifier>_down` / `<modifier>_up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModifierEdge {
    Down(Key),
    Up(Key),
}

/// Recognise `alt_down`, `ctrl_up` and friends.
pub(crate) fn modifier_edge(name: &str) -> Option<ModifierEdge> {
    let name = name.trim().to_lowercase();
    let (modifier, edge): (&str, fn(Key) -> ModifierEdge) =
        if let Some(modifier) = name.strip_suffix("_down") {
            (modifier, ModifierEdge::Down)
        } else if let Some(modifier) = name.strip_suffix("_up") {
            (modifier, ModifierEdge::Up)
        } else {
            return None;
        };

    match parse_key(modifier)? {
        key @ (Key::Alt | Key::Control | Key::Shift | Key::Meta) => Some(edge(key)),
        _ => None,
    }
}
