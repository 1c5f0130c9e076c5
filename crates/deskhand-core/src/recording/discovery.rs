//! Locating the clip written by the OS capture facility.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use directories::UserDirs;
use tracing::{debug, instrument};

/// Slack before the session start to absorb file finalisation latency.
pub(crate) const CLIP_GRACE_WINDOW: Duration = Duration::from_secs(60);

/// Container formats the capture facility writes.
const CLIP_EXTENSIONS: [&str; 4] = ["mp4", "mov", "mkv", "avi"];

/// Capture subfolders, English and localised names.
const CAPTURE_SUBFOLDERS: [&str; 4] = ["Captures", "Клипы", "Game Clips", "Игровые клипы"];

/// A video file found during clip discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipCandidate {
    /// Full path of the clip.
    pub path: PathBuf,
    /// Last modification time.
    pub modified_at: SystemTime,
    /// File size in bytes.
    pub size_bytes: u64,
}

/// Existing video-library directories of the current user.
///
/// The platform video folder comes first; the fixed fallbacks cover
/// profiles where the folder keeps its English on-disk name behind a
/// localised display name, or the other way round.
pub(crate) fn default_video_dirs() -> Vec<PathBuf> {
    let Some(user_dirs) = UserDirs::new() else {
        return Vec::new();
    };

    let home = user_dirs.home_dir();
    let candidates = user_dirs
        .video_dir()
        .map(Path::to_path_buf)
        .into_iter()
        .chain([home.join("Videos"), home.join("Видео")]);

    dedup(candidates.filter(|dir| dir.is_dir()))
}

/// Candidate capture directories under `video_dirs`, in discovery order.
///
/// Each video directory contributes its existing capture subfolders and
/// then itself, since some systems write clips straight into it.
pub fn capture_dirs(video_dirs: &[PathBuf]) -> Vec<PathBuf> {
    let dirs = video_dirs.iter().flat_map(|video_dir| {
        CAPTURE_SUBFOLDERS
            .iter()
            .map(|sub| video_dir.join(sub))
            .filter(|dir| dir.is_dir())
            .chain(std::iter::once(video_dir.clone()))
            .collect::<Vec<_>>()
    });

    dedup(dirs)
}

fn dedup(dirs: impl Iterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    dirs.filter(|dir| seen.insert(dir.clone())).collect()
}

fn is_clip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CLIP_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}

/// Newest clip in `dirs` modified at or after `since` minus the grace window.
///
/// Directories are scanned non-recursively. Unreadable directories and
/// entries are skipped. On equal modification times the first file seen
/// wins.
#[instrument(skip(dirs), fields(dirs = dirs.len()))]
pub fn find_latest_clip(dirs: &[PathBuf], since: SystemTime) -> Option<ClipCandidate> {
    let threshold = since.checked_sub(CLIP_GRACE_WINDOW).unwrap_or(UNIX_EPOCH);
    let mut newest: Option<ClipCandidate> = None;

    for dir in dirs {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = ?dir, error = %e, "Skipping unreadable capture directory");
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !is_clip(&path) {
                continue;
            }
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            let Ok(modified_at) = metadata.modified() else {
                continue;
            };

            let newer = newest
                .as_ref()
                .is_none_or(|current| modified_at > current.modified_at);
            if modified_at >= threshold && newer {
                newest = Some(ClipCandidate {
                    path,
                    modified_at,
                    size_bytes: metadata.len(),
                });
            }
        }
    }

    debug!(found = newest.is_some(), "Clip discovery finished");
    newest
}
