//! Dispatch engine: the single entry point that turns a request into an outcome.

use crate::{
    ActionOutcome, CoreError, DescriptorStore, EnigoInjector, KeyInjector, Launcher,
    LayoutBackend, MediaAction, OsLauncher, OsLayoutBackend, OsWindowProvider, PreferenceSink,
    ProcessWindowProvider, RecordingSettings, RecordingState, SearchEngine, SearchPreferences,
    combo::ComboInterpreter,
    layout::{LAYOUT_SETTLE_DELAY, LayoutSwitcher},
    recording::RecordingController,
    resolver::TargetResolver,
    search::WebSearch,
    toggle::ToggleStore,
    window::WindowMatcher,
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// One action requested by the transport.
#[derive(Debug, Clone)]
pub enum ActionRequest {
    /// Run the app descriptor with this key.
    App(String),
    /// Run the combo descriptor with this key.
    Combo(String),
    /// Click a media or navigation key.
    Media(MediaAction),
    /// Start or stop the OS screen recording.
    ToggleRecording,
    /// Deliver the clip found by the last stopped recording.
    SendLastClip,
    /// Leave the last clip on disk and forget it.
    KeepLastClip,
    /// Open a link or search the web for free text.
    Search(String),
    /// Change the web search engine.
    SetSearchEngine(SearchEngine),
    /// Replace the descriptor store and reset toggle state.
    Reload(DescriptorStore),
}

/// OS capability backends injected into the engine.
pub struct Backends<P, L, K, Y> {
    /// Process and window control.
    pub windows: P,
    /// Default-handler open and detached spawn.
    pub launcher: L,
    /// Keyboard injection.
    pub injector: K,
    /// Keyboard layout query and switch.
    pub layouts: Y,
}

impl Default for Backends<OsWindowProvider, OsLauncher, EnigoInjector, OsLayoutBackend> {
    fn default() -> Self {
        Self {
            windows: OsWindowProvider,
            launcher: OsLauncher,
            injector: EnigoInjector,
            layouts: OsLayoutBackend,
        }
    }
}

/// Tunables for an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Directory that relative descriptor paths resolve against.
    pub base_dir: PathBuf,
    /// Wait after each layout switch.
    pub layout_settle: Duration,
    /// Recording controller settings.
    pub recording: RecordingSettings,
    /// Initial search settings.
    pub search: SearchPreferences,
}

impl EngineSettings {
    /// Defaults rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            layout_settle: LAYOUT_SETTLE_DELAY,
            recording: RecordingSettings::default(),
            search: SearchPreferences::default(),
        }
    }
}

/// Owns every piece of mutable dispatch state and the capability backends.
///
/// All state changes go through [`Engine::dispatch`], so wrapping the engine
/// in one mutex serialises toggles and recording sessions.
pub struct Engine<P, L, K, Y> {
    store: DescriptorStore,
    toggles: ToggleStore,
    matcher: WindowMatcher<P>,
    launcher: L,
    injector: K,
    layouts: LayoutSwitcher<Y>,
    recorder: RecordingController,
    search: SearchPreferences,
    preferences: Box<dyn PreferenceSink>,
    base_dir: PathBuf,
}

/// Engine wired to the real OS backends.
pub type OsEngine = Engine<OsWindowProvider, OsLauncher, EnigoInjector, OsLayoutBackend>;

impl OsEngine {
    /// Engine with the OS backends of the current platform.
    pub fn with_os_backends(
        store: DescriptorStore,
        settings: EngineSettings,
        preferences: Box<dyn PreferenceSink>,
    ) -> Self {
        Engine::new(store, settings, Backends::default(), preferences)
    }
}

impl<P, L, K, Y> Engine<P, L, K, Y>
where
    P: ProcessWindowProvider,
    L: Launcher,
    K: KeyInjector,
    Y: LayoutBackend,
{
    /// Build an engine from a loaded store and explicit backends.
    pub fn new(
        store: DescriptorStore,
        settings: EngineSettings,
        backends: Backends<P, L, K, Y>,
        preferences: Box<dyn PreferenceSink>,
    ) -> Self {
        Self {
            store,
            toggles: ToggleStore::default(),
            matcher: WindowMatcher::new(backends.windows),
            launcher: backends.launcher,
            injector: backends.injector,
            layouts: LayoutSwitcher::new(backends.layouts, settings.layout_settle),
            recorder: RecordingController::new(settings.recording),
            search: settings.search,
            preferences,
            base_dir: settings.base_dir,
        }
    }

    /// The descriptors currently loaded.
    pub fn store(&self) -> &DescriptorStore {
        &self.store
    }

    /// Current search settings.
    pub fn search_preferences(&self) -> &SearchPreferences {
        &self.search
    }

    /// Directory that relative descriptor paths resolve against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Current screen-recording state.
    pub fn recording_state(&self) -> RecordingState {
        self.recorder.state()
    }

    /// Clip found by the last stopped recording, until kept or replaced.
    pub fn last_clip(&self) -> Option<&Path> {
        self.recorder.last_clip()
    }

    /// Run one request. Always yields exactly one outcome; backend errors
    /// become [`ActionOutcome::Failure`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, request: ActionRequest) -> ActionOutcome {
        let outcome = match request {
            ActionRequest::App(key) => self.run_app(&key),
            ActionRequest::Combo(key) => self.run_combo(&key),
            ActionRequest::Media(action) => match self.injector.click(action.key()) {
                Ok(()) => ActionOutcome::Success,
                Err(e) => e.into(),
            },
            ActionRequest::ToggleRecording => self.recorder.toggle(&mut self.injector),
            ActionRequest::SendLastClip => self.recorder.send_last_clip(),
            ActionRequest::KeepLastClip => self.recorder.keep_last_clip(),
            ActionRequest::Search(text) => WebSearch {
                launcher: &self.launcher,
                store: &self.store,
                preferences: &mut self.search,
                sink: self.preferences.as_mut(),
                base_dir: &self.base_dir,
            }
            .run(&text),
            ActionRequest::SetSearchEngine(engine) => self.set_search_engine(engine),
            ActionRequest::Reload(store) => self.reload(store),
        };

        if !outcome.is_success() {
            warn!(outcome = %outcome, "Action did not succeed");
        }
        outcome
    }

    fn run_app(&mut self, key: &str) -> ActionOutcome {
        let Some(app) = self.store.app(key) else {
            return not_found(key).into();
        };

        TargetResolver {
            matcher: &self.matcher,
            launcher: &self.launcher,
            toggles: &mut self.toggles,
            base_dir: &self.base_dir,
        }
        .resolve(app)
    }

    fn run_combo(&mut self, key: &str) -> ActionOutcome {
        let Some(combo) = self.store.combo(key) else {
            return not_found(key).into();
        };

        ComboInterpreter {
            launcher: &self.launcher,
            injector: &mut self.injector,
            layouts: &self.layouts,
            recorder: &mut self.recorder,
            store: &self.store,
            preferences: &mut self.search,
            sink: self.preferences.as_mut(),
            base_dir: &self.base_dir,
        }
        .run(combo)
    }

    fn set_search_engine(&mut self, engine: SearchEngine) -> ActionOutcome {
        self.search.engine = engine;
        if let Err(e) = self.preferences.save_search_engine(engine) {
            return e.into();
        }

        info!(engine = %engine, "Search engine changed");
        ActionOutcome::Text(format!("Search engine: {engine}"))
    }

    fn reload(&mut self, store: DescriptorStore) -> ActionOutcome {
        self.store = store;
        self.toggles.clear();

        info!(
            apps = self.store.apps().len(),
            combos = self.store.combos().len(),
            "Descriptors reloaded"
        );
        ActionOutcome::Text(format!(
            "Reloaded {} apps and {} combos",
            self.store.apps().len(),
            self.store.combos().len()
        ))
    }

    /// Toggle state tracked for an app key.
    #[cfg(test)]
    pub(crate) fn toggle_mode(&self, key: &str) -> crate::ToggleMode {
        self.toggles.get(key)
    }
}

#[track_caller]
fn not_found(key: &str) -> CoreError {
    CoreError::DescriptorNotFound {
        key: key.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
