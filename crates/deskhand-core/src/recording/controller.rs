//! Screen-recording toggle and clip hand-off.

use crate::{
    ActionOutcome, KeyInjector,
    input::RECORD_TOGGLE_KEYS,
    recording::{RecordingState, capture_dirs, default_video_dirs, find_latest_clip},
};

use std::{
    path::{Path, PathBuf},
    thread,
    time::{Duration, SystemTime},
};

use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Time the OS needs to finalise the clip after the stop hot-key.
pub(crate) const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Clips above this size are not handed to the transport.
pub(crate) const DEFAULT_MAX_CLIP_BYTES: u64 = 2000 * 1024 * 1024;

/// Recording controller settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSettings {
    /// Wait between the stop hot-key and clip discovery.
    pub settle_delay: Duration,
    /// Largest clip handed to the transport.
    pub max_clip_bytes: u64,
    /// Video-library directories to search, in priority order.
    pub video_dirs: Vec<PathBuf>,
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            max_clip_bytes: DEFAULT_MAX_CLIP_BYTES,
            video_dirs: default_video_dirs(),
        }
    }
}

/// Owns the process-wide recording session and the last found clip.
pub(crate) struct RecordingController {
    state: RecordingState,
    last_clip: Option<PathBuf>,
    settings: RecordingSettings,
}

impl RecordingController {
    pub(crate) fn new(settings: RecordingSettings) -> Self {
        Self {
            state: RecordingState::Idle,
            last_clip: None,
            settings,
        }
    }

    pub(crate) fn state(&self) -> RecordingState {
        self.state
    }

    pub(crate) fn last_clip(&self) -> Option<&Path> {
        self.last_clip.as_deref()
    }

    /// Start or stop the OS recording.
    ///
    /// The hot-key is sent FIRST; if it fails the state is unchanged and
    /// the operator can retry.
    #[instrument(skip(self, injector))]
    pub(crate) fn toggle<K: KeyInjector>(&mut self, injector: &mut K) -> ActionOutcome {
        if let Err(e) = injector.hotkey(&RECORD_TOGGLE_KEYS) {
            warn!(error = %e, "Record hot-key failed");
            return e.into();
        }

        match self.state {
            RecordingState::Idle => {
                let session_id = Uuid::new_v4();
                self.state = RecordingState::Recording {
                    started_at: SystemTime::now(),
                    session_id,
                };

                info!(session_id = %session_id, "Recording started");
                ActionOutcome::Text(
                    "Recording started (Win+Alt+R). Trigger again to stop.".to_string(),
                )
            }
            RecordingState::Recording {
                started_at,
                session_id,
            } => {
                self.state = RecordingState::Idle;
                let duration = started_at.elapsed().unwrap_or_default();
                info!(
                    session_id = %session_id,
                    duration_ms = duration.as_millis(),
                    "Recording stopped"
                );

                thread::sleep(self.settings.settle_delay);
                self.collect_clip(started_at)
            }
        }
    }

    fn collect_clip(&mut self, since: SystemTime) -> ActionOutcome {
        let dirs = capture_dirs(&self.settings.video_dirs);
        let clip = find_latest_clip(&dirs, since);
        self.last_clip = clip.as_ref().map(|clip| clip.path.clone());

        match clip {
            Some(clip) => {
                info!(path = ?clip.path, size_bytes = clip.size_bytes, "Clip found");
                ActionOutcome::Text(format!(
                    "Recording stopped. Latest clip:\n{}\nSend it?",
                    clip.path.display()
                ))
            }
            None => {
                let hint = if dirs.is_empty() {
                    "(could not determine the clips folder)".to_string()
                } else {
                    dirs.iter()
                        .map(|dir| dir.display().to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                };
                ActionOutcome::Text(format!(
                    "Recording stopped, but the clip was not found. Check:\n{hint}"
                ))
            }
        }
    }

    /// Hand the last clip to the transport, unless it is gone or too large.
    #[instrument(skip(self))]
    pub(crate) fn send_last_clip(&self) -> ActionOutcome {
        let Some(clip) = self.last_clip.as_ref() else {
            return ActionOutcome::NotFound("clip".to_string());
        };

        let size = match clip.metadata() {
            Ok(metadata) if metadata.is_file() => metadata.len(),
            _ => return ActionOutcome::NotFound(clip.display().to_string()),
        };

        if size > self.settings.max_clip_bytes {
            return ActionOutcome::Text(format!(
                "Clip is too large to send ({} MB). Left in place:\n{}",
                size / (1024 * 1024),
                clip.display()
            ));
        }

        ActionOutcome::File(clip.clone())
    }

    /// Leave the last clip where it is and forget it.
    pub(crate) fn keep_last_clip(&mut self) -> ActionOutcome {
        match self.last_clip.take() {
            Some(clip) => ActionOutcome::Text(format!("Left the clip in place:\n{}", clip.display())),
            None => ActionOutcome::Text("Nothing to keep (no clip recorded).".to_string()),
        }
    }
}
