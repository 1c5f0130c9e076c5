use crate::{
    AppDescriptor, ComboDescriptor, CoreResult,
    descriptor::{RawApp, RawCombo},
};

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument, warn};

/// Immutable set of descriptors, replaced wholesale on reload.
#[derive(Debug, Clone, Default)]
pub struct DescriptorStore {
    apps: Vec<AppDescriptor>,
    combos: Vec<ComboDescriptor>,
    app_index: HashMap<String, usize>,
    combo_index: HashMap<String, usize>,
}

impl DescriptorStore {
    /// Parse `apps.json` and `combos.json` contents.
    ///
    /// # Errors
    ///
    /// Returns an error if either document is not a JSON array.
    /// Individual bad or mistyped records are skipped with a warning instead.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn from_json(apps_json: &str, combos_json: &str) -> CoreResult<Self> {
        let apps: Vec<Value> = serde_json::from_str(apps_json)?;
        let combos: Vec<Value> = serde_json::from_str(combos_json)?;
        Ok(Self::from_records(
            typed_records(apps, "app"),
            typed_records(combos, "combo"),
        ))
    }

    /// Normalise raw records. Invalid records and duplicate keys are
    /// dropped; the first record for a key wins.
    pub(crate) fn from_records(apps: Vec<RawApp>, combos: Vec<RawCombo>) -> Self {
        let mut store = Self::default();

        for raw in apps {
            match AppDescriptor::from_raw(raw) {
                Ok(app) if store.app_index.contains_key(&app.key) => {
                    warn!(key = %app.key, "Duplicate app key, keeping the first");
                }
                Ok(app) => {
                    store.app_index.insert(app.key.clone(), store.apps.len());
                    store.apps.push(app);
                }
                Err(e) => warn!(error = %e, "Skipping app descriptor"),
            }
        }

        for raw in combos {
            match ComboDescriptor::from_raw(raw) {
                Ok(combo) if store.combo_index.contains_key(&combo.key) => {
                    warn!(key = %combo.key, "Duplicate combo key, keeping the first");
                }
                Ok(combo) => {
                    store.combo_index.insert(combo.key.clone(), store.combos.len());
                    store.combos.push(combo);
                }
                Err(e) => warn!(error = %e, "Skipping combo descriptor"),
            }
        }

        info!(
            apps = store.apps.len(),
            combos = store.combos.len(),
            "Descriptors loaded"
        );

        store
    }

    /// App descriptor by key, regardless of menu visibility.
    pub fn app(&self, key: &str) -> Option<&AppDescriptor> {
        self.app_index.get(key).map(|&i| &self.apps[i])
    }

    /// Combo descriptor by key, regardless of menu visibility.
    pub fn combo(&self, key: &str) -> Option<&ComboDescriptor> {
        self.combo_index.get(key).map(|&i| &self.combos[i])
    }

    /// All app descriptors in file order.
    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    /// All combo descriptors in file order.
    pub fn combos(&self) -> &[ComboDescriptor] {
        &self.combos
    }

    /// App descriptors shown in the remote menu.
    pub fn menu_apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter().filter(|app| app.show_in_menu)
    }

    /// Combo descriptors shown in the remote menu.
    pub fn menu_combos(&self) -> impl Iterator<Item = &ComboDescriptor> {
        self.combos.iter().filter(|combo| combo.show_in_menu)
    }
}

/// Convert each element on its own so one mistyped record does not sink the file.
fn typed_records<T: DeserializeOwned>(values: Vec<Value>, kind: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(kind, index, error = %e, "Skipping mistyped descriptor record");
                None
            }
        })
        .collect()
}
