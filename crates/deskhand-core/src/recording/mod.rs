mod controller;
mod discovery;
mod state;

pub(crate) use {controller::RecordingController, discovery::default_video_dirs};

pub use {
    controller::RecordingSettings,
    discovery::{ClipCandidate, capture_dirs, find_latest_clip},
    state::RecordingState,
};
