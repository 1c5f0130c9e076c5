//! In-memory capability backends for deterministic engine tests.
//!
//! Every fake is a cheap `Clone` handle over shared state, so a test keeps
//! one copy for assertions and moves the other into the engine.

#![allow(clippy::unwrap_used)]

use crate::{
    CoreError, CoreResult, DescriptorStore, Engine, EngineSettings, KeyInjector, Launcher,
    LayoutBackend, PreferenceSink, ProcessInfo, ProcessWindowProvider, RawLayout,
    RecordingSettings, SearchEngine, WindowHandle, WindowInfo, engine::Backends,
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use enigo::Key;
use error_location::ErrorLocation;

/// US English layout handle (language id in the low word).
pub(crate) const EN: RawLayout = RawLayout(0x0409_0409);
/// Russian layout handle.
pub(crate) const RU: RawLayout = RawLayout(0x0419_0419);

// ---------------------------------------------------------------------------
// Processes and windows
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct WindowsState {
    processes: Vec<ProcessInfo>,
    windows: Vec<WindowInfo>,
    restored: Vec<WindowHandle>,
    fronted: Vec<WindowHandle>,
    minimized: Vec<WindowHandle>,
    refuse_foreground: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeWindows {
    state: Arc<Mutex<WindowsState>>,
}

impl FakeWindows {
    /// Register a running process owning one window.
    pub(crate) fn add(&self, pid: u32, image_name: &str, handle: isize, visible: bool) {
        let mut state = self.state.lock().unwrap();
        state.processes.push(ProcessInfo {
            pid,
            image_name: image_name.to_string(),
        });
        state.windows.push(WindowInfo {
            handle: WindowHandle(handle),
            pid,
            visible,
        });
    }

    /// Register a running process with no top-level windows.
    pub(crate) fn add_process(&self, pid: u32, image_name: &str) {
        self.state.lock().unwrap().processes.push(ProcessInfo {
            pid,
            image_name: image_name.to_string(),
        });
    }

    pub(crate) fn refuse_foreground(&self) {
        self.state.lock().unwrap().refuse_foreground = true;
    }

    pub(crate) fn restored(&self) -> Vec<WindowHandle> {
        self.state.lock().unwrap().restored.clone()
    }

    pub(crate) fn fronted(&self) -> Vec<WindowHandle> {
        self.state.lock().unwrap().fronted.clone()
    }

    pub(crate) fn minimized(&self) -> Vec<WindowHandle> {
        self.state.lock().unwrap().minimized.clone()
    }
}

impl ProcessWindowProvider for FakeWindows {
    fn processes(&self) -> Vec<ProcessInfo> {
        self.state.lock().unwrap().processes.clone()
    }

    fn windows(&self) -> Vec<WindowInfo> {
        self.state.lock().unwrap().windows.clone()
    }

    fn restore(&self, window: WindowHandle) -> bool {
        self.state.lock().unwrap().restored.push(window);
        true
    }

    fn bring_to_front(&self, window: WindowHandle) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.refuse_foreground {
            return false;
        }
        state.fronted.push(window);
        true
    }

    fn minimize(&self, window: WindowHandle) -> bool {
        self.state.lock().unwrap().minimized.push(window);
        true
    }
}

// ---------------------------------------------------------------------------
// Launcher
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct LauncherState {
    opened: Vec<String>,
    spawned: Vec<(PathBuf, Vec<String>)>,
    failing_open_prefixes: Vec<String>,
    fail_spawn: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeLauncher {
    state: Arc<Mutex<LauncherState>>,
}

impl FakeLauncher {
    /// Make `open` fail for targets starting with `prefix`.
    pub(crate) fn fail_open_for(&self, prefix: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_open_prefixes
            .push(prefix.to_string());
    }

    pub(crate) fn fail_spawn(&self) {
        self.state.lock().unwrap().fail_spawn = true;
    }

    pub(crate) fn opened(&self) -> Vec<String> {
        self.state.lock().unwrap().opened.clone()
    }

    pub(crate) fn spawned(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.state.lock().unwrap().spawned.clone()
    }
}

impl Launcher for FakeLauncher {
    fn open(&self, target: &str) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state
            .failing_open_prefixes
            .iter()
            .any(|prefix| target.starts_with(prefix.as_str()))
        {
            return Err(CoreError::LaunchFailure {
                target: target.to_string(),
                reason: "no handler".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        state.opened.push(target.to_string());
        Ok(())
    }

    fn spawn(&self, program: &Path, args: &[String]) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_spawn {
            return Err(CoreError::LaunchFailure {
                target: program.display().to_string(),
                reason: "file not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        state.spawned.push((program.to_path_buf(), args.to_vec()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

/// One call observed by [`FakeInjector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyEvent {
    Press(Key),
    Release(Key),
    Click(Key),
    Hotkey(Vec<Key>),
    Chord(Vec<Key>),
    ShowDesktop,
}

#[derive(Debug, Default)]
struct InjectorState {
    events: Vec<KeyEvent>,
    fail: bool,
    /// Layout backend to sample on every send, if attached.
    layouts: Option<FakeLayouts>,
    layouts_seen: Vec<Option<RawLayout>>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeInjector {
    state: Arc<Mutex<InjectorState>>,
}

impl FakeInjector {
    /// Make every injection fail.
    pub(crate) fn fail(&self) {
        self.state.lock().unwrap().fail = true;
    }

    /// Record the active layout of `layouts` at every send.
    pub(crate) fn observe_layouts(&self, layouts: &FakeLayouts) {
        self.state.lock().unwrap().layouts = Some(layouts.clone());
    }

    pub(crate) fn events(&self) -> Vec<KeyEvent> {
        self.state.lock().unwrap().events.clone()
    }

    pub(crate) fn layouts_seen(&self) -> Vec<Option<RawLayout>> {
        self.state.lock().unwrap().layouts_seen.clone()
    }

    fn record(&mut self, event: KeyEvent) -> CoreResult<()> {
        let mut state = self.state.lock().unwrap();
        let seen = state.layouts.as_ref().map(|layouts| layouts.active());
        if let Some(seen) = seen {
            state.layouts_seen.push(seen);
        }
        if state.fail {
            return Err(CoreError::KeyInjectionFailure {
                reason: "input blocked".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        state.events.push(event);
        Ok(())
    }
}

impl KeyInjector for FakeInjector {
    fn press(&mut self, key: Key) -> CoreResult<()> {
        self.record(KeyEvent::Press(key))
    }

    fn release(&mut self, key: Key) -> CoreResult<()> {
        self.record(KeyEvent::Release(key))
    }

    fn click(&mut self, key: Key) -> CoreResult<()> {
        self.record(KeyEvent::Click(key))
    }

    fn hotkey(&mut self, keys: &[Key]) -> CoreResult<()> {
        self.record(KeyEvent::Hotkey(keys.to_vec()))
    }

    fn chord(&mut self, keys: &[Key]) -> CoreResult<()> {
        self.record(KeyEvent::Chord(keys.to_vec()))
    }

    fn show_desktop(&mut self) -> CoreResult<()> {
        self.record(KeyEvent::ShowDesktop)
    }
}

// ---------------------------------------------------------------------------
// Keyboard layouts
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct LayoutState {
    active: Option<RawLayout>,
    installed: Vec<RawLayout>,
    activations: Vec<RawLayout>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeLayouts {
    state: Arc<Mutex<LayoutState>>,
}

impl FakeLayouts {
    /// Backend with `installed` layouts and `active` in the foreground.
    pub(crate) fn new(active: Option<RawLayout>, installed: &[RawLayout]) -> Self {
        Self {
            state: Arc::new(Mutex::new(LayoutState {
                active,
                installed: installed.to_vec(),
                activations: Vec::new(),
            })),
        }
    }

    pub(crate) fn activations(&self) -> Vec<RawLayout> {
        self.state.lock().unwrap().activations.clone()
    }
}

impl LayoutBackend for FakeLayouts {
    fn active(&self) -> Option<RawLayout> {
        self.state.lock().unwrap().active
    }

    fn installed(&self) -> Vec<RawLayout> {
        self.state.lock().unwrap().installed.clone()
    }

    fn activate(&self, layout: RawLayout) -> bool {
        let mut state = self.state.lock().unwrap();
        state.activations.push(layout);
        state.active = Some(layout);
        true
    }
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct PreferenceState {
    browsers: Vec<Option<String>>,
    engines: Vec<SearchEngine>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakePreferences {
    state: Arc<Mutex<PreferenceState>>,
}

impl FakePreferences {
    /// Every preferred-browser value persisted so far.
    pub(crate) fn browsers(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().browsers.clone()
    }

    pub(crate) fn engines(&self) -> Vec<SearchEngine> {
        self.state.lock().unwrap().engines.clone()
    }
}

impl PreferenceSink for FakePreferences {
    fn save_search_browser(&mut self, key: Option<&str>) -> CoreResult<()> {
        self.state
            .lock()
            .unwrap()
            .browsers
            .push(key.map(str::to_string));
        Ok(())
    }

    fn save_search_engine(&mut self, engine: SearchEngine) -> CoreResult<()> {
        self.state.lock().unwrap().engines.push(engine);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Engine harness
// ---------------------------------------------------------------------------

pub(crate) type FakeEngine = Engine<FakeWindows, FakeLauncher, FakeInjector, FakeLayouts>;

/// An engine on fakes plus handles to every fake it owns.
pub(crate) struct Harness {
    pub(crate) engine: FakeEngine,
    pub(crate) windows: FakeWindows,
    pub(crate) launcher: FakeLauncher,
    pub(crate) injector: FakeInjector,
    pub(crate) layouts: FakeLayouts,
    pub(crate) preferences: FakePreferences,
}

/// Settings with no delays and no video directories.
pub(crate) fn quiet_settings(base_dir: &Path) -> EngineSettings {
    EngineSettings {
        layout_settle: Duration::ZERO,
        recording: RecordingSettings {
            settle_delay: Duration::ZERO,
            max_clip_bytes: 2000 * 1024 * 1024,
            video_dirs: Vec::new(),
        },
        ..EngineSettings::new(base_dir)
    }
}

/// Build an engine over `apps_json`/`combos_json` with fresh fakes.
pub(crate) fn harness(apps_json: &str, combos_json: &str) -> Harness {
    harness_with(apps_json, combos_json, quiet_settings(Path::new(".")), FakeLayouts::default())
}

pub(crate) fn harness_with(
    apps_json: &str,
    combos_json: &str,
    settings: EngineSettings,
    layouts: FakeLayouts,
) -> Harness {
    let store = DescriptorStore::from_json(apps_json, combos_json).unwrap();
    let windows = FakeWindows::default();
    let launcher = FakeLauncher::default();
    let injector = FakeInjector::default();
    let preferences = FakePreferences::default();

    let engine = Engine::new(
        store,
        settings,
        Backends {
            windows: windows.clone(),
            launcher: launcher.clone(),
            injector: injector.clone(),
            layouts: layouts.clone(),
        },
        Box::new(preferences.clone()),
    );

    Harness {
        engine,
        windows,
        launcher,
        injector,
        layouts,
        preferences,
    }
}
