//! Classification helpers for descriptor paths.

use std::path::{Component, Path, PathBuf};

use url::Url;

/// Page opened when a `tg://` link has no registered handler.
pub(crate) const TELEGRAM_INSTALL_URL: &str = "https://desktop.telegram.org";

/// URI schemes opened through the default handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UriScheme {
    Http,
    Https,
    /// Chat client deep link; falls back to the installer page.
    Telegram,
    /// Game platform deep link.
    Steam,
}

/// Recognised scheme of `path`, if it is a `scheme://…` URI we handle.
pub(crate) fn uri_scheme(path: &str) -> Option<UriScheme> {
    let path = path.trim();
    let url = Url::parse(path).ok()?;

    // Url::parse also accepts `C:\…` and `mailto:` style strings.
    if !path[url.scheme().len()..].starts_with("://") {
        return None;
    }

    match url.scheme() {
        "http" => Some(UriScheme::Http),
        "https" => Some(UriScheme::Https),
        "tg" => Some(UriScheme::Telegram),
        "steam" => Some(UriScheme::Steam),
        _ => None,
    }
}

/// `steam://rungameid/<appid>`.
pub(crate) fn steam_launch_uri(appid: &str) -> String {
    format!("steam://rungameid/{}", appid.trim())
}

/// Whether `path` names an internet shortcut file.
pub(crate) fn is_shortcut(path: &str) -> bool {
    path.trim().to_lowercase().ends_with(".url")
}

/// Whether `path` names a Windows executable.
pub(crate) fn is_executable(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
}

/// Resolve a descriptor path against `base_dir`.
///
/// Absolute paths are kept. A bare file name that does not exist under
/// `base_dir` is kept as-is so the OS can find it on `PATH`.
pub(crate) fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path.trim());
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let joined = base_dir.join(path);
    let bare_name = matches!(
        path.components().collect::<Vec<_>>().as_slice(),
        [Component::Normal(_)]
    );

    if bare_name && !joined.exists() {
        path.to_path_buf()
    } else {
        joined
    }
}
