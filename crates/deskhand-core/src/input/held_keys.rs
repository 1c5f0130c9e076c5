use crate::{CoreError, CoreResult};

use std::{panic::Location, thread, time::Duration};

use enigo::{Direction, Enigo, Key, Keyboard};
use error_location::ErrorLocation;

/// RAII guard that guarantees every key it pressed is released when dropped.
///
/// Prevents stuck modifiers if a later press in a combination fails.
///
/// Borrows the `Enigo` instance so all keyboard operations go through it.
/// On drop, releases the held keys in reverse order with best-effort
/// semantics -- if a release fails, the OS will reset modifier state on the
/// next physical key press/release by the user.
pub(crate) struct HeldKeys<'a> {
    enigo: &'a mut Enigo,
    held: Vec<Key>,
    pace: Duration,
}

impl<'a> HeldKeys<'a> {
    /// Start holding nothing; keys are added with [`HeldKeys::press`].
    pub(crate) fn new(enigo: &'a mut Enigo, pace: Duration) -> Self {
        Self {
            enigo,
            held: Vec::new(),
            pace,
        }
    }

    /// Press `key` and remember it for release.
    #[track_caller]
    pub(crate) fn press(&mut self, key: Key) -> CoreResult<()> {
        self.enigo
            .key(key, Direction::Press)
            .map_err(|e| CoreError::KeyInjectionFailure {
                reason: format!("Failed to press {key:?}: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.held.push(key);

        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
        Ok(())
    }

    /// Release everything now, reporting the first failure.
    #[track_caller]
    pub(crate) fn release_all(mut self) -> CoreResult<()> {
        let mut first_error = None;
        while let Some(key) = self.held.pop() {
            if let Err(e) = self.enigo.key(key, Direction::Release) {
                first_error.get_or_insert_with(|| CoreError::KeyInjectionFailure {
                    reason: format!("Failed to release {key:?}: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if !self.pace.is_zero() {
                thread::sleep(self.pace);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for HeldKeys<'_> {
    fn drop(&mut self) {
        while let Some(key) = self.held.pop() {
            let _ = self.enigo.key(key, Direction::Release);
        }
    }
}
