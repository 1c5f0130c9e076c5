use crate::{CoreError, CoreResult, launch::Launcher};

use std::{
    panic::Location,
    path::Path,
    process::{Command, Stdio},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Launcher backed by the `open` crate and `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsLauncher;

impl Launcher for OsLauncher {
    #[track_caller]
    #[instrument(skip(self))]
    fn open(&self, target: &str) -> CoreResult<()> {
        open::that(target).map_err(|e| CoreError::LaunchFailure {
            target: target.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Opened with default handler");
        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn spawn(&self, program: &Path, args: &[String]) -> CoreResult<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CoreError::LaunchFailure {
                target: program.display().to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Dropping the handle detaches the child.
        debug!(pid = child.id(), "Process spawned");
        Ok(())
    }
}
