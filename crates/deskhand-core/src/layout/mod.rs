mod guard;
mod os;
mod switcher;

pub(crate) use {
    guard::LayoutGuard,
    switcher::{LAYOUT_SETTLE_DELAY, LayoutSwitcher},
};

pub use os::OsLayoutBackend;

use std::{fmt, str::FromStr};

/// Language id of the US English layout.
const LANG_EN: u16 = 0x0409;
/// Language id of the Russian layout.
const LANG_RU: u16 = 0x0419;

/// Keyboard input layout a combo may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// English (US).
    En,
    /// Russian.
    Ru,
    /// Anything else, or no foreground window to read from.
    Unknown,
}

impl Layout {
    /// Locale id in the low word of an OS layout handle.
    pub const fn lang_id(self) -> Option<u16> {
        match self {
            Layout::En => Some(LANG_EN),
            Layout::Ru => Some(LANG_RU),
            Layout::Unknown => None,
        }
    }

    /// Classify a locale id.
    pub const fn from_lang_id(lang: u16) -> Self {
        match lang {
            LANG_EN => Layout::En,
            LANG_RU => Layout::Ru,
            _ => Layout::Unknown,
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Layout::En),
            "ru" => Ok(Layout::Ru),
            other => Err(format!("unsupported layout {other:?} (expected none, en or ru)")),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::En => write!(f, "en"),
            Layout::Ru => write!(f, "ru"),
            Layout::Unknown => write!(f, "unknown"),
        }
    }
}

/// Opaque OS layout handle (an `HKL` on Windows).
///
/// Kept raw so a scoped switch can restore exactly what was active, even
/// when that layout is neither `en` nor `ru`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawLayout(pub u64);

impl RawLayout {
    /// The layout family this handle belongs to.
    pub fn layout(self) -> Layout {
        Layout::from_lang_id((self.0 & 0xFFFF) as u16)
    }
}

/// OS capability for reading and changing the active input layout.
pub trait LayoutBackend: Send {
    /// Layout of the foreground window's thread, if there is one.
    fn active(&self) -> Option<RawLayout>;

    /// Layouts currently loaded by the system, in system order.
    fn installed(&self) -> Vec<RawLayout>;

    /// Request `layout` for the foreground window. Returns whether the
    /// request was accepted.
    fn activate(&self, layout: RawLayout) -> bool;
}
