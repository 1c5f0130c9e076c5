use crate::config::Config;

use std::{panic::Location, path::PathBuf};

use deskhand_core::{CoreError, CoreResult, PreferenceSink, SearchEngine};
use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Writes search preference changes back to the config file.
#[derive(Debug)]
pub struct ConfigPreferences {
    config: Config,
    config_path: PathBuf,
}

impl ConfigPreferences {
    /// Sink persisting into `config_path`, starting from `config`.
    pub fn new(config: Config, config_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            config_path: config_path.into(),
        }
    }

    #[track_caller]
    fn persist(&self) -> CoreResult<()> {
        self.config
            .save(&self.config_path)
            .map_err(|e| CoreError::PreferenceFailure {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl PreferenceSink for ConfigPreferences {
    #[instrument(skip(self))]
    fn save_search_browser(&mut self, key: Option<&str>) -> CoreResult<()> {
        self.config.search.preferred_browser_key = key.unwrap_or_default().to_string();
        self.persist()?;
        info!(browser = ?key, "Search browser preference saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn save_search_engine(&mut self, engine: SearchEngine) -> CoreResult<()> {
        self.config.search.engine = engine.name().to_string();
        self.persist()?;
        info!(engine = %engine, "Search engine preference saved");
        Ok(())
    }
}
