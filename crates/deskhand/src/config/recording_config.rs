use crate::config::{default_max_clip_size_mb, default_settle_delay_ms};

use serde::{Deserialize, Serialize};

/// Screen recording settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Wait after the stop hot-key before looking for the clip.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Largest clip that is offered for delivery.
    #[serde(default = "default_max_clip_size_mb")]
    pub max_clip_size_mb: u64,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            max_clip_size_mb: default_max_clip_size_mb(),
        }
    }
}
