use crate::{
    CoreError, CoreResult, Layout,
    descriptor::{
        SCREEN_RECORD_KEY,
        raw::{RawCombo, non_blank},
    },
};

use std::panic::Location;

use error_location::ErrorLocation;

/// What a combo does when triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboAction {
    /// Send a key sequence, optionally under a specific input layout.
    Keys {
        /// Logical key names; empty means nothing to send.
        keys: Vec<String>,
        /// Layout required while sending, `None` to keep the current one.
        layout: Option<Layout>,
    },
    /// Run a script or open a file, fire-and-forget.
    Batch {
        /// Script path, relative to the base directory unless absolute.
        path: String,
    },
    /// Choose which app descriptor opens web searches.
    SetSearchBrowser {
        /// Key of the browser's app descriptor.
        target_browser_key: String,
    },
    /// Start or stop the OS screen recording.
    ScreenRecord,
}

/// A named keyboard macro or one of the alternate combo modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboDescriptor {
    /// Unique, stable identifier.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Behaviour, fixed at load time.
    pub action: ComboAction,
    /// Whether the remote menu lists this entry.
    pub show_in_menu: bool,
}

impl ComboDescriptor {
    /// Normalise a raw JSON record. A set `type` takes precedence over `keys`.
    #[track_caller]
    pub(crate) fn from_raw(raw: RawCombo) -> CoreResult<Self> {
        let key = non_blank(raw.key.as_ref()).ok_or_else(|| CoreError::DescriptorInvalid {
            key: None,
            reason: "missing key".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let invalid = |reason: String| CoreError::DescriptorInvalid {
            key: Some(key.clone()),
            reason,
            location: ErrorLocation::from(Location::caller()),
        };

        let kind = non_blank(raw.kind.as_ref()).map(|kind| kind.to_lowercase());

        let action = match kind.as_deref() {
            None | Some("none") if key == SCREEN_RECORD_KEY => ComboAction::ScreenRecord,
            None | Some("none") => {
                let layout = match non_blank(raw.layout.as_ref()) {
                    None => None,
                    Some(layout) if layout.eq_ignore_ascii_case("none") => None,
                    Some(layout) => Some(layout.parse::<Layout>().map_err(invalid)?),
                };
                ComboAction::Keys {
                    keys: raw.keys.unwrap_or_default(),
                    layout,
                }
            }
            Some("batch") => ComboAction::Batch {
                path: non_blank(raw.path.as_ref())
                    .ok_or_else(|| invalid("batch combo needs a path".to_string()))?,
            },
            Some("set_search_browser") => ComboAction::SetSearchBrowser {
                target_browser_key: non_blank(raw.target_browser_key.as_ref()).ok_or_else(
                    || invalid("set_search_browser combo needs target_browser_key".to_string()),
                )?,
            },
            Some("screen_record") => ComboAction::ScreenRecord,
            Some(other) => return Err(invalid(format!("unknown combo type {other:?}"))),
        };

        Ok(Self {
            name: non_blank(raw.name.as_ref()).unwrap_or_else(|| key.clone()),
            key,
            action,
            show_in_menu: raw.show_in_menu.unwrap_or(true),
        })
    }
}
