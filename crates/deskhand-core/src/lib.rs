//! Deskhand Core Library
//!
//! Action dispatch engine for remotely driving a single desktop host:
//! application toggling, keyboard macros with layout coordination,
//! media keys, and screen-recording sessions with clip discovery.
//!
//! # Example
//!
//! ```no_run
//! use deskhand_core::{ActionRequest, DescriptorStore, EngineSettings, NoopPreferences, OsEngine};
//!
//! let store = DescriptorStore::from_json(
//!     r#"[{"key": "notepad", "name": "Notepad", "path": "notepad.exe", "is_app": "y"}]"#,
//!     "[]",
//! )?;
//! let mut engine = OsEngine::with_os_backends(
//!     store,
//!     EngineSettings::new("."),
//!     Box::new(NoopPreferences),
//! );
//!
//! let outcome = engine.dispatch(ActionRequest::App("notepad".to_string()));
//! println!("{outcome}");
//! # Ok::<(), deskhand_core::CoreError>(())
//! ```

mod combo;
mod descriptor;
mod engine;
mod error;
mod input;
mod launch;
mod layout;
mod outcome;
mod recording;
mod resolver;
mod search;
mod toggle;
mod window;

pub use {
    descriptor::{AppDescriptor, ComboAction, ComboDescriptor, DescriptorStore},
    engine::{ActionRequest, Backends, Engine, EngineSettings, OsEngine},
    error::{CoreError, Result as CoreResult},
    input::{EnigoInjector, KeyInjector, MediaAction},
    launch::{Launcher, OsLauncher},
    layout::{Layout, LayoutBackend, OsLayoutBackend, RawLayout},
    outcome::ActionOutcome,
    recording::{ClipCandidate, RecordingSettings, RecordingState, capture_dirs, find_latest_clip},
    search::{NoopPreferences, PreferenceSink, SearchEngine, SearchPreferences},
    toggle::ToggleMode,
    window::{OsWindowProvider, ProcessInfo, ProcessWindowProvider, WindowHandle, WindowInfo},
};

#[cfg(test)]
mod tests;
