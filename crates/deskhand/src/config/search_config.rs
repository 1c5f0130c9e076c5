use crate::config::default_search_engine;

use deskhand_core::{SearchEngine, SearchPreferences};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Web search preferences, written back when the operator changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Engine name: `google`, `yandex` or `bing`.
    #[serde(default = "default_search_engine")]
    pub engine: String,

    /// App key of the browser that opens searches. Empty means the default handler.
    #[serde(default)]
    pub preferred_browser_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_search_engine(),
            preferred_browser_key: String::new(),
        }
    }
}

impl SearchConfig {
    /// Engine-side view. Unknown engine names fall back to google.
    pub fn to_preferences(&self) -> SearchPreferences {
        let engine = self.engine.parse::<SearchEngine>().unwrap_or_else(|reason| {
            warn!(engine = %self.engine, reason = %reason, "Falling back to default search engine");
            SearchEngine::default()
        });

        let key = self.preferred_browser_key.trim();

        SearchPreferences {
            engine,
            preferred_browser_key: (!key.is_empty()).then(|| key.to_string()),
        }
    }
}
