use std::collections::HashMap;

/// Last known window state of a toggled app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    /// Next toggle shows (or launches) the app.
    #[default]
    Minimized,
    /// Next toggle minimises the app.
    Shown,
}

/// Per-descriptor toggle state, keyed by descriptor key.
///
/// Entries are created on first toggle and live until [`ToggleStore::clear`].
#[derive(Debug, Default)]
pub(crate) struct ToggleStore {
    modes: HashMap<String, ToggleMode>,
}

impl ToggleStore {
    pub(crate) fn get(&self, key: &str) -> ToggleMode {
        self.modes.get(key).copied().unwrap_or_default()
    }

    pub(crate) fn set(&mut self, key: &str, mode: ToggleMode) {
        self.modes.insert(key.to_string(), mode);
    }

    pub(crate) fn clear(&mut self) {
        self.modes.clear();
    }
}
