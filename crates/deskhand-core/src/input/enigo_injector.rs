//! Keyboard injection through `enigo`.

use crate::{CoreError, CoreResult, input::HeldKeys, input::KeyInjector};

use std::{panic::Location, time::Duration};

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Delay between key events of a hot-key combination.
///
/// Some shells and input method editors need a small gap between
/// key-down events to recognise the combination. 10ms is the minimum
/// reliable interval.
const KEY_EVENT_DELAY: Duration = Duration::from_millis(10);

/// Key injector backed by `enigo`.
///
/// NOTE: A new Enigo instance is created for every operation because
/// Enigo is not Send on every platform, while the engine must be movable
/// onto a blocking worker thread. Enigo::new() is cheap.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnigoInjector;

impl EnigoInjector {
    #[track_caller]
    fn enigo() -> CoreResult<Enigo> {
        Enigo::new(&Settings::default()).map_err(|e| CoreError::KeyInjectionFailure {
            reason: format!("Failed to create Enigo: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn send(key: Key, direction: Direction) -> CoreResult<()> {
        Self::enigo()?
            .key(key, direction)
            .map_err(|e| CoreError::KeyInjectionFailure {
                reason: format!("Failed to send {key:?} {direction:?}: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn combination(keys: &[Key], pace: Duration) -> CoreResult<()> {
        let mut enigo = Self::enigo()?;
        let mut held = HeldKeys::new(&mut enigo, pace);
        for &key in keys {
            held.press(key)?;
        }
        // Guard would release on drop too; releasing here surfaces errors.
        held.release_all()
    }
}

impl KeyInjector for EnigoInjector {
    fn press(&mut self, key: Key) -> CoreResult<()> {
        Self::send(key, Direction::Press)
    }

    fn release(&mut self, key: Key) -> CoreResult<()> {
        Self::send(key, Direction::Release)
    }

    fn click(&mut self, key: Key) -> CoreResult<()> {
        Self::send(key, Direction::Click)
    }

    #[instrument(skip(self))]
    fn hotkey(&mut self, keys: &[Key]) -> CoreResult<()> {
        Self::combination(keys, KEY_EVENT_DELAY)?;
        debug!("Hot-key sent");
        Ok(())
    }

    #[instrument(skip(self))]
    fn chord(&mut self, keys: &[Key]) -> CoreResult<()> {
        Self::combination(keys, Duration::ZERO)?;
        debug!("Chord sent");
        Ok(())
    }

    #[cfg(target_os = "windows")]
    #[instrument(skip(self))]
    fn show_desktop(&mut self) -> CoreResult<()> {
        use std::process::{Command, Stdio};

        // Win+D injected from a background process is unreliable with
        // virtual desktops; ask the shell directly.
        let status = Command::new("powershell.exe")
            .args([
                "-NoProfile",
                "-Command",
                "(New-Object -ComObject Shell.Application).MinimizeAll()",
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| CoreError::KeyInjectionFailure {
                reason: format!("Failed to run show-desktop shell command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !status.success() {
            return Err(CoreError::KeyInjectionFailure {
                reason: format!("Show-desktop shell command exited with {status}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("Desktop shown");
        Ok(())
    }

    #[cfg(not(target_os = "windows"))]
    #[instrument(skip(self))]
    fn show_desktop(&mut self) -> CoreResult<()> {
        self.hotkey(&[Key::Meta, Key::Unicode('d')])
    }
}
