//! Configuration management for deskhand.
//!
//! Handles loading and saving the TOML configuration file with
//! cross-platform paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{PathsConfig, RecordingConfig, SearchConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use deskhand_core::EngineSettings;
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Descriptor file locations.
    pub paths: PathsConfig,
    /// Web search preferences.
    #[serde(default)]
    pub search: SearchConfig,
    /// Screen recording settings.
    #[serde(default)]
    pub recording: RecordingConfig,
}

impl Config {
    /// Defaults with descriptors resolved under `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathsConfig::new(base_dir),
            search: SearchConfig::default(),
            recording: RecordingConfig::default(),
        }
    }

    /// Load configuration from `config_path`, creating a default one if not found.
    ///
    /// The default roots descriptor files in the directory holding the config.
    #[track_caller]
    #[instrument]
    pub fn load(config_path: &Path) -> AppResult<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            Self::create_default(config_path)
        }
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Engine settings derived from this configuration.
    pub fn to_engine_settings(&self) -> EngineSettings {
        let mut settings = EngineSettings::new(self.paths.base_dir.clone());
        settings.recording.settle_delay = Duration::from_millis(self.recording.settle_delay_ms);
        settings.recording.max_clip_bytes = self
            .recording
            .max_clip_size_mb
            .saturating_mul(1024 * 1024);
        settings.search = self.search.to_preferences();
        settings
    }

    /// Platform config file location, creating its directory if needed.
    #[track_caller]
    pub fn default_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "deskhand", "Deskhand").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default(config_path: &Path) -> AppResult<Self> {
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let config = Config::with_base_dir(base_dir);
        config.save(config_path)?;

        warn!(
            apps_file = ?config.paths.apps_path(),
            combos_file = ?config.paths.combos_path(),
            "Default config created. Descriptor files must be written before actions are available."
        );

        Ok(config)
    }
}
