mod enigo_injector;
mod held_keys;
mod keys;
mod media;

pub(crate) use {
    held_keys::HeldKeys,
    keys::{ModifierEdge, is_super, modifier_edge, parse_key, parse_keys},
};

pub use {enigo_injector::EnigoInjector, media::MediaAction};

use crate::CoreResult;

use enigo::Key;

/// `Win+Alt+R`, the OS screen-recording toggle.
pub(crate) const RECORD_TOGGLE_KEYS: [Key; 3] = [Key::Meta, Key::Alt, Key::Unicode('r')];

/// OS capability for synthesised keyboard input.
pub trait KeyInjector: Send {
    /// Press a key without releasing it.
    fn press(&mut self, key: Key) -> CoreResult<()>;

    /// Release a previously pressed key.
    fn release(&mut self, key: Key) -> CoreResult<()>;

    /// Press and release a single key.
    fn click(&mut self, key: Key) -> CoreResult<()>;

    /// Send a hot-key combination: press in order with a short gap between
    /// events, release in reverse.
    fn hotkey(&mut self, keys: &[Key]) -> CoreResult<()>;

    /// Send a literal chord: press all, release in reverse, no pacing.
    fn chord(&mut self, keys: &[Key]) -> CoreResult<()>;

    /// Minimise everything and show the desktop.
    fn show_desktop(&mut self) -> CoreResult<()>;
}
