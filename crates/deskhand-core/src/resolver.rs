//! Target Resolver: turns an app descriptor into exactly one launch strategy.

use crate::{
    ActionOutcome, AppDescriptor, CoreResult, Launcher, ProcessWindowProvider, ToggleMode,
    launch::{
        TELEGRAM_INSTALL_URL, UriScheme, is_executable, is_shortcut, resolve_path,
        steam_launch_uri, uri_scheme,
    },
    toggle::ToggleStore,
    window::WindowMatcher,
};

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

/// Strategy chosen for a descriptor. Priority order is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LaunchStrategy {
    /// Launch through the game platform by app id.
    Steam(String),
    /// Open a recognised URI with the default handler.
    Uri(String, UriScheme),
    /// Open an internet shortcut file.
    Shortcut(PathBuf),
    /// Launch without toggle tracking.
    Exec(PathBuf),
    /// Show/minimise toggle, launching when nothing is running.
    Toggle(PathBuf),
}

impl LaunchStrategy {
    /// Classify `app`. Pure in `(path, args, is_app, steam_appid)`.
    pub(crate) fn classify(app: &AppDescriptor, base_dir: &Path) -> Self {
        if let Some(appid) = &app.steam_appid {
            return LaunchStrategy::Steam(appid.clone());
        }
        if let Some(scheme) = uri_scheme(&app.path) {
            return LaunchStrategy::Uri(app.path.trim().to_string(), scheme);
        }
        if is_shortcut(&app.path) {
            return LaunchStrategy::Shortcut(resolve_path(base_dir, &app.path));
        }

        let resolved = resolve_path(base_dir, &app.path);
        if app.is_app {
            LaunchStrategy::Toggle(resolved)
        } else {
            LaunchStrategy::Exec(resolved)
        }
    }
}

/// Resolves and executes app descriptors.
pub(crate) struct TargetResolver<'a, P, L> {
    pub(crate) matcher: &'a WindowMatcher<P>,
    pub(crate) launcher: &'a L,
    pub(crate) toggles: &'a mut ToggleStore,
    pub(crate) base_dir: &'a Path,
}

impl<P: ProcessWindowProvider, L: Launcher> TargetResolver<'_, P, L> {
    #[instrument(skip(self, app), fields(key = %app.key))]
    pub(crate) fn resolve(&mut self, app: &AppDescriptor) -> ActionOutcome {
        match LaunchStrategy::classify(app, self.base_dir) {
            LaunchStrategy::Steam(appid) => {
                into_outcome(self.launcher.open(&steam_launch_uri(&appid)))
            }
            LaunchStrategy::Uri(uri, scheme) => self.open_uri(&uri, scheme),
            LaunchStrategy::Shortcut(path) => {
                into_outcome(self.launcher.open(&path.to_string_lossy()))
            }
            LaunchStrategy::Exec(path) => into_outcome(self.exec(&path, &app.args)),
            LaunchStrategy::Toggle(path) => self.toggle(app, &path),
        }
    }

    fn open_uri(&self, uri: &str, scheme: UriScheme) -> ActionOutcome {
        let Err(e) = self.launcher.open(uri) else {
            return ActionOutcome::Success;
        };

        if scheme != UriScheme::Telegram {
            return e.into();
        }

        warn!(error = %e, "No handler for chat link, opening installer page");
        match self.launcher.open(TELEGRAM_INSTALL_URL) {
            Ok(()) => ActionOutcome::Text(
                "App is not installed, opened the installer page instead.".to_string(),
            ),
            Err(e) => e.into(),
        }
    }

    /// Spawn executables that have arguments; everything else goes to the
    /// default handler.
    fn exec(&self, path: &Path, args: &[String]) -> CoreResult<()> {
        if is_executable(path) && !args.is_empty() {
            self.launcher.spawn(path, args)
        } else {
            self.launcher.open(&path.to_string_lossy())
        }
    }

    /// Launch an app that is not running, preferring a direct spawn for
    /// executables and falling back to the default handler.
    fn launch(&self, path: &Path, args: &[String]) -> CoreResult<()> {
        if !is_executable(path) {
            return self.launcher.open(&path.to_string_lossy());
        }

        match self.launcher.spawn(path, args) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Spawn failed, retrying with default handler");
                self.launcher.open(&path.to_string_lossy())
            }
        }
    }

    fn toggle(&mut self, app: &AppDescriptor, path: &Path) -> ActionOutcome {
        match self.toggles.get(&app.key) {
            ToggleMode::Minimized => {
                let outcome = if self.matcher.activate(&app.exe) {
                    info!("Activated running window");
                    ActionOutcome::Success
                } else {
                    into_outcome(self.launch(path, &app.args))
                };

                // Optimistic: a failed launch still counts as shown until
                // the next toggle.
                self.toggles.set(&app.key, ToggleMode::Shown);
                outcome
            }
            ToggleMode::Shown => {
                if !self.matcher.minimize(&app.exe) {
                    info!("Nothing to minimise");
                }
                self.toggles.set(&app.key, ToggleMode::Minimized);
                ActionOutcome::Success
            }
        }
    }
}

fn into_outcome(result: CoreResult<()>) -> ActionOutcome {
    match result {
        Ok(()) => ActionOutcome::Success,
        Err(e) => e.into(),
    }
}
