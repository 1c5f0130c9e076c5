use crate::{
    CoreError, CoreResult,
    descriptor::raw::{RawApp, non_blank, optional_id, string_list, yes_no},
};

use std::panic::Location;

use error_location::ErrorLocation;

/// A launchable application, link or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Unique, stable identifier.
    pub key: String,
    /// Display name.
    pub name: String,
    /// URI, file path or shortcut.
    pub path: String,
    /// Arguments passed when spawning an executable.
    pub args: Vec<String>,
    /// Process image name fragment used to find running windows.
    pub exe: String,
    /// Whether show/minimise toggle semantics apply.
    pub is_app: bool,
    /// Game platform id; launching by id takes priority over `path`.
    pub steam_appid: Option<String>,
    /// Whether the remote menu lists this entry.
    pub show_in_menu: bool,
}

impl AppDescriptor {
    /// Normalise a raw JSON record.
    #[track_caller]
    pub(crate) fn from_raw(raw: RawApp) -> CoreResult<Self> {
        let key = non_blank(raw.key.as_ref()).ok_or_else(|| CoreError::DescriptorInvalid {
            key: None,
            reason: "missing key".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = raw.path.as_deref().map(str::trim).unwrap_or_default().to_string();
        let steam_appid = optional_id(raw.steam_appid.as_ref());

        if path.is_empty() && steam_appid.is_none() {
            return Err(CoreError::DescriptorInvalid {
                key: Some(key),
                reason: "needs a path or a steam_appid".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut args = string_list(raw.args.as_ref());
        if args.is_empty() {
            args = string_list(raw.arg.as_ref());
        }

        let exe = non_blank(raw.exe.as_ref()).unwrap_or_else(|| default_exe_hint(&path));

        Ok(Self {
            name: non_blank(raw.name.as_ref()).unwrap_or_else(|| key.clone()),
            key,
            path,
            args,
            exe,
            is_app: yes_no(raw.is_app.as_ref(), true),
            steam_appid,
            show_in_menu: raw.show_in_menu.unwrap_or(true),
        })
    }
}

/// Last segment of `path`, split on either separator.
fn default_exe_hint(path: &str) -> String {
    path.rsplit(['\\', '/'])
        .next()
        .unwrap_or_default()
        .to_string()
}
