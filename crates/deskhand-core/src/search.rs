//! Web search and link opening for free-text requests.

use crate::{
    ActionOutcome, AppDescriptor, CoreResult, DescriptorStore, Launcher, launch::resolve_path,
};

use std::{fmt, path::Path, str::FromStr};

use tracing::{info, instrument, warn};
use url::form_urlencoded;

/// Search engine used for free-text queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchEngine {
    /// google.com
    #[default]
    Google,
    /// yandex.ru
    Yandex,
    /// bing.com
    Bing,
}

impl SearchEngine {
    /// Query URL prefix; the encoded query is appended.
    pub fn template(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Yandex => "https://yandex.ru/search/?text=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
        }
    }

    /// Config name.
    pub fn name(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Yandex => "yandex",
            SearchEngine::Bing => "bing",
        }
    }

    /// Full search URL for `query`, form-encoded.
    pub fn url_for(self, query: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{}", self.template(), encoded)
    }
}

impl FromStr for SearchEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(SearchEngine::Google),
            "yandex" => Ok(SearchEngine::Yandex),
            "bing" => Ok(SearchEngine::Bing),
            other => Err(format!("unknown search engine {other:?}")),
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory search settings owned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPreferences {
    /// Engine for free-text queries.
    pub engine: SearchEngine,
    /// App descriptor key of the browser that opens searches, if any.
    pub preferred_browser_key: Option<String>,
}

/// Collaborator that persists settings changed by actions.
pub trait PreferenceSink: Send {
    /// Persist the preferred search browser (`None` clears it).
    fn save_search_browser(&mut self, key: Option<&str>) -> CoreResult<()>;

    /// Persist the search engine choice.
    fn save_search_engine(&mut self, engine: SearchEngine) -> CoreResult<()>;
}

/// Preference sink that keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPreferences;

impl PreferenceSink for NoopPreferences {
    fn save_search_browser(&mut self, _key: Option<&str>) -> CoreResult<()> {
        Ok(())
    }

    fn save_search_engine(&mut self, _engine: SearchEngine) -> CoreResult<()> {
        Ok(())
    }
}

/// First `http://` or `https://` link in `text`.
pub(crate) fn first_link(text: &str) -> Option<&str> {
    text.split_whitespace().find_map(|word| {
        ["https://", "http://"].iter().find_map(|prefix| {
            word.find(prefix)
                .map(|start| &word[start..])
                .filter(|link| link.len() > prefix.len())
        })
    })
}

/// Runs free-text requests.
pub(crate) struct WebSearch<'a, L> {
    pub(crate) launcher: &'a L,
    pub(crate) store: &'a DescriptorStore,
    pub(crate) preferences: &'a mut SearchPreferences,
    pub(crate) sink: &'a mut dyn PreferenceSink,
    pub(crate) base_dir: &'a Path,
}

impl<'a, L: Launcher> WebSearch<'a, L> {
    #[instrument(skip(self))]
    pub(crate) fn run(&mut self, text: &str) -> ActionOutcome {
        let text = text.trim();
        if text.is_empty() {
            return ActionOutcome::Text("Nothing to search for.".to_string());
        }

        if let Some(link) = first_link(text) {
            return match self.launcher.open(link) {
                Ok(()) => ActionOutcome::Text(format!("Opened link: {link}")),
                Err(e) => e.into(),
            };
        }

        let url = self.preferences.engine.url_for(text);
        let mut notice = None;

        if let Some(browser) = self.preferred_browser() {
            match self.open_in(browser, &url) {
                Ok(()) => {
                    info!(browser = %browser.key, "Search opened in preferred browser");
                    return ActionOutcome::Text(format!("Searching in {}: {text}", browser.name));
                }
                Err(e) => {
                    warn!(error = %e, "Preferred browser failed, clearing preference");
                    notice = Some(format!(
                        "Could not open {}: {}. ",
                        browser.name,
                        e.user_message()
                    ));
                    self.preferences.preferred_browser_key = None;
                    if let Err(e) = self.sink.save_search_browser(None) {
                        warn!(error = %e, "Failed to persist cleared browser preference");
                    }
                }
            }
        }

        match self.launcher.open(&url) {
            Ok(()) => ActionOutcome::Text(format!(
                "{}Searching in the default browser: {text}",
                notice.unwrap_or_default()
            )),
            Err(e) => e.into(),
        }
    }

    /// The preferred browser, if it is set and refers to an app.
    fn preferred_browser(&self) -> Option<&'a AppDescriptor> {
        let store: &'a DescriptorStore = self.store;
        let key = self.preferences.preferred_browser_key.as_deref()?;
        store.app(key).filter(|app| app.is_app)
    }

    fn open_in(&self, browser: &AppDescriptor, url: &str) -> CoreResult<()> {
        let program = resolve_path(self.base_dir, &browser.path);
        let mut args = browser.args.clone();
        args.push(url.to_string());
        self.launcher.spawn(&program, &args)
    }
}
