#[allow(clippy::module_inception)]
mod config;
mod paths_config;
mod preferences;
mod recording_config;
mod search_config;

pub(crate) use {
    config::Config, paths_config::PathsConfig, preferences::ConfigPreferences,
    recording_config::RecordingConfig, search_config::SearchConfig,
};

use std::path::PathBuf;

pub(crate) const DEFAULT_APPS_FILE: &str = "apps.json";
pub(crate) const DEFAULT_COMBOS_FILE: &str = "combos.json";
pub(crate) const DEFAULT_SEARCH_ENGINE: &str = "google";
pub(crate) const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;
pub(crate) const DEFAULT_MAX_CLIP_SIZE_MB: u64 = 2000;

pub(crate) fn default_apps_file() -> PathBuf {
    PathBuf::from(DEFAULT_APPS_FILE)
}

pub(crate) fn default_combos_file() -> PathBuf {
    PathBuf::from(DEFAULT_COMBOS_FILE)
}

pub(crate) fn default_search_engine() -> String {
    DEFAULT_SEARCH_ENGINE.to_string()
}

pub(crate) fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

pub(crate) fn default_max_clip_size_mb() -> u64 {
    DEFAULT_MAX_CLIP_SIZE_MB
}
