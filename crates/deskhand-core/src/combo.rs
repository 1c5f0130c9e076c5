//! Combo Interpreter: runs a combo descriptor's action.

use crate::{
    ActionOutcome, ComboAction, ComboDescriptor, CoreError, CoreResult, DescriptorStore,
    KeyInjector, Launcher, Layout, LayoutBackend, PreferenceSink, SearchPreferences,
    input::{ModifierEdge, is_super, modifier_edge, parse_key, parse_keys},
    launch::resolve_path,
    layout::LayoutSwitcher,
    recording::RecordingController,
};

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

/// Interpreter and argument list that runs a batch target detached.
pub(crate) fn batch_command(path: &Path) -> (PathBuf, Vec<String>) {
    let target = path.to_string_lossy().into_owned();
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let start = |rest: Vec<String>| {
        let mut args = vec!["/c".to_string(), "start".to_string(), String::new()];
        args.extend(rest);
        (PathBuf::from("cmd.exe"), args)
    };

    match ext.as_str() {
        "ps1" => (
            PathBuf::from("powershell.exe"),
            vec![
                "-NoProfile".to_string(),
                "-ExecutionPolicy".to_string(),
                "Bypass".to_string(),
                "-File".to_string(),
                target,
            ],
        ),
        "py" => start(vec!["python".to_string(), target]),
        "sh" => (PathBuf::from("sh"), vec![target]),
        _ => start(vec![target]),
    }
}

/// `["win", "d"]`, which gets the dedicated show-desktop action.
fn is_show_desktop(keys: &[String]) -> bool {
    matches!(keys, [modifier, key] if is_super(modifier) && key.trim().eq_ignore_ascii_case("d"))
}

/// Executes combo descriptors against the injected backends.
pub(crate) struct ComboInterpreter<'a, L, K, Y> {
    pub(crate) launcher: &'a L,
    pub(crate) injector: &'a mut K,
    pub(crate) layouts: &'a LayoutSwitcher<Y>,
    pub(crate) recorder: &'a mut RecordingController,
    pub(crate) store: &'a DescriptorStore,
    pub(crate) preferences: &'a mut SearchPreferences,
    pub(crate) sink: &'a mut dyn PreferenceSink,
    pub(crate) base_dir: &'a Path,
}

impl<L: Launcher, K: KeyInjector, Y: LayoutBackend> ComboInterpreter<'_, L, K, Y> {
    #[instrument(skip(self, combo), fields(key = %combo.key))]
    pub(crate) fn run(&mut self, combo: &ComboDescriptor) -> ActionOutcome {
        match &combo.action {
            ComboAction::Batch { path } => self.batch(combo, path),
            ComboAction::SetSearchBrowser { target_browser_key } => {
                self.set_search_browser(target_browser_key)
            }
            ComboAction::ScreenRecord => self.recorder.toggle(self.injector),
            ComboAction::Keys { keys, layout } => self.keys(combo, keys, *layout),
        }
    }

    fn batch(&self, combo: &ComboDescriptor, path: &str) -> ActionOutcome {
        let resolved = resolve_path(self.base_dir, path);
        if !resolved.exists() {
            warn!(path = ?resolved, "Batch target missing");
            return ActionOutcome::NotFound(resolved.display().to_string());
        }

        let (program, args) = batch_command(&resolved);
        match self.launcher.spawn(&program, &args) {
            Ok(()) => {
                info!(program = ?program, "Batch launched");
                ActionOutcome::Text(format!("Launched {}", combo.name))
            }
            Err(e) => failure(combo, &e),
        }
    }

    fn set_search_browser(&mut self, target: &str) -> ActionOutcome {
        let Some(browser) = self.store.app(target) else {
            return ActionOutcome::NotFound(target.to_string());
        };

        self.preferences.preferred_browser_key = Some(browser.key.clone());
        if let Err(e) = self.sink.save_search_browser(Some(&browser.key)) {
            warn!(error = %e, "Failed to persist search browser");
            return e.into();
        }

        info!(browser = %browser.key, "Search browser changed");
        ActionOutcome::Text(format!("Searches now open in {}", browser.name))
    }

    /// Send a key sequence. The layout guard restores the original layout
    /// whether or not the send succeeded.
    fn keys(
        &mut self,
        combo: &ComboDescriptor,
        keys: &[String],
        layout: Option<Layout>,
    ) -> ActionOutcome {
        if keys.is_empty() {
            return ActionOutcome::Text(format!("{}: nothing to send", combo.name));
        }

        if let [only] = keys {
            if let Some(edge) = modifier_edge(only) {
                let result = match edge {
                    ModifierEdge::Down(key) => self.injector.press(key),
                    ModifierEdge::Up(key) => self.injector.release(key),
                };
                return finish(combo, result);
            }
            if only.trim().chars().count() == 1 {
                if let Some(key) = parse_key(only) {
                    return finish(combo, self.injector.click(key));
                }
            }
        }

        let parsed = match parse_keys(keys) {
            Ok(parsed) => parsed,
            Err(e) => return failure(combo, &e),
        };

        let guard = self.layouts.scoped(layout);
        if guard.switched() {
            debug!(layout = ?layout, "Sending under switched layout");
        }
        let result = if is_show_desktop(keys) {
            self.injector.show_desktop()
        } else if keys.iter().any(|name| is_super(name)) {
            self.injector.hotkey(&parsed)
        } else {
            self.injector.chord(&parsed)
        };
        drop(guard);

        finish(combo, result)
    }
}

fn finish(combo: &ComboDescriptor, result: CoreResult<()>) -> ActionOutcome {
    match result {
        Ok(()) => ActionOutcome::Success,
        Err(e) => failure(combo, &e),
    }
}

fn failure(combo: &ComboDescriptor, e: &CoreError) -> ActionOutcome {
    warn!(key = %combo.key, error = %e, "Combo failed");
    ActionOutcome::Failure(format!("{}: {}", combo.name, e.user_message()))
}
