mod os;
mod target;

pub(crate) use target::{
    TELEGRAM_INSTALL_URL, UriScheme, is_executable, is_shortcut, resolve_path, steam_launch_uri,
    uri_scheme,
};

pub use os::OsLauncher;

use crate::CoreResult;

use std::path::Path;

/// OS capability for starting things.
pub trait Launcher: Send {
    /// Open a path or URI with the OS default handler.
    fn open(&self, target: &str) -> CoreResult<()>;

    /// Start `program` with `args` as a detached process.
    ///
    /// Returns once the process has been created; its exit status is never
    /// observed.
    fn spawn(&self, program: &Path, args: &[String]) -> CoreResult<()>;
}
