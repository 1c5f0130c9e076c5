use std::{fmt, str::FromStr};

use enigo::Key;

/// Media and navigation controls sent as a single key click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAction {
    /// Raise system volume.
    VolumeUp,
    /// Lower system volume.
    VolumeDown,
    /// Toggle mute.
    VolumeMute,
    /// Toggle playback.
    PlayPause,
    /// Skip to next track.
    NextTrack,
    /// Go to previous track.
    PrevTrack,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Space bar, usually play/pause in the focused player.
    Space,
}

impl MediaAction {
    /// Every control, in menu order.
    pub const ALL: [MediaAction; 13] = [
        MediaAction::PageUp,
        MediaAction::ArrowUp,
        MediaAction::PageDown,
        MediaAction::ArrowLeft,
        MediaAction::ArrowDown,
        MediaAction::ArrowRight,
        MediaAction::Space,
        MediaAction::VolumeDown,
        MediaAction::VolumeMute,
        MediaAction::VolumeUp,
        MediaAction::PrevTrack,
        MediaAction::PlayPause,
        MediaAction::NextTrack,
    ];

    /// Key clicked for this control.
    pub fn key(self) -> Key {
        match self {
            MediaAction::VolumeUp => Key::VolumeUp,
            MediaAction::VolumeDown => Key::VolumeDown,
            MediaAction::VolumeMute => Key::VolumeMute,
            MediaAction::PlayPause => Key::MediaPlayPause,
            MediaAction::NextTrack => Key::MediaNextTrack,
            MediaAction::PrevTrack => Key::MediaPrevTrack,
            MediaAction::ArrowUp => Key::UpArrow,
            MediaAction::ArrowDown => Key::DownArrow,
            MediaAction::ArrowLeft => Key::LeftArrow,
            MediaAction::ArrowRight => Key::RightArrow,
            MediaAction::PageUp => Key::PageUp,
            MediaAction::PageDown => Key::PageDown,
            MediaAction::Space => Key::Space,
        }
    }

    /// Wire name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            MediaAction::VolumeUp => "volume_up",
            MediaAction::VolumeDown => "volume_down",
            MediaAction::VolumeMute => "volume_mute",
            MediaAction::PlayPause => "play_pause",
            MediaAction::NextTrack => "next",
            MediaAction::PrevTrack => "prev",
            MediaAction::ArrowUp => "arrow_up",
            MediaAction::ArrowDown => "arrow_down",
            MediaAction::ArrowLeft => "arrow_left",
            MediaAction::ArrowRight => "arrow_right",
            MediaAction::PageUp => "page_up",
            MediaAction::PageDown => "page_down",
            MediaAction::Space => "space",
        }
    }
}

impl FromStr for MediaAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MediaAction::ALL
            .into_iter()
            .find(|action| action.name() == wanted)
            .ok_or_else(|| format!("unknown media action {s:?}"))
    }
}

impl fmt::Display for MediaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
