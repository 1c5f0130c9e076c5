mod app;
mod combo;
mod raw;
mod store;

pub use {
    app::AppDescriptor,
    combo::{ComboAction, ComboDescriptor},
    store::DescriptorStore,
};

pub(crate) use raw::{RawApp, RawCombo};

/// Combo key reserved for the screen-recording toggle.
pub(crate) const SCREEN_RECORD_KEY: &str = "screen_rec";
