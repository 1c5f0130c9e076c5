use crate::config::{default_apps_file, default_combos_file};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Descriptor file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory that relative descriptor, shortcut and batch paths resolve against.
    pub base_dir: PathBuf,

    /// App descriptor list, relative to `base_dir` unless absolute.
    #[serde(default = "default_apps_file")]
    pub apps_file: PathBuf,

    /// Combo descriptor list, relative to `base_dir` unless absolute.
    #[serde(default = "default_combos_file")]
    pub combos_file: PathBuf,
}

impl PathsConfig {
    /// Defaults rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            apps_file: default_apps_file(),
            combos_file: default_combos_file(),
        }
    }

    /// Resolved path of the app descriptor file.
    pub fn apps_path(&self) -> PathBuf {
        self.base_dir.join(&self.apps_file)
    }

    /// Resolved path of the combo descriptor file.
    pub fn combos_path(&self) -> PathBuf {
        self.base_dir.join(&self.combos_file)
    }
}
