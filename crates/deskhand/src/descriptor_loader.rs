//! Reads the descriptor files named by the config into a store.

use crate::{AppResult, config::PathsConfig};

use std::{fs, io::ErrorKind, path::Path};

use deskhand_core::DescriptorStore;
use tracing::{error, info, instrument};

/// Load both descriptor files. A missing file counts as an empty list.
#[track_caller]
#[instrument]
pub(crate) fn load_descriptors(paths: &PathsConfig) -> AppResult<DescriptorStore> {
    let apps_json = read_list(&paths.apps_path())?;
    let combos_json = read_list(&paths.combos_path())?;

    let store = DescriptorStore::from_json(&apps_json, &combos_json)?;

    info!(
        apps_file = ?paths.apps_path(),
        combos_file = ?paths.combos_path(),
        "Descriptor files read"
    );

    Ok(store)
}

#[track_caller]
fn read_list(path: &Path) -> AppResult<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!(path = ?path, "Descriptor file not found, using an empty list");
            Ok("[]".to_string())
        }
        Err(e) => Err(e.into()),
    }
}
