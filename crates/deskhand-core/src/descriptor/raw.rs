//! Loosely-typed descriptor records as they appear in JSON.

use serde::Deserialize;
use serde_json::Value;

/// One entry of `apps.json` before normalisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawApp {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub args: Option<Value>,
    #[serde(default)]
    pub arg: Option<Value>,
    #[serde(default)]
    pub exe: Option<String>,
    #[serde(default)]
    pub is_app: Option<Value>,
    #[serde(default)]
    pub steam_appid: Option<Value>,
    #[serde(default)]
    pub show_in_menu: Option<bool>,
}

/// One entry of `combos.json` before normalisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawCombo {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keys: Option<Vec<String>>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub target_browser_key: Option<String>,
    #[serde(default)]
    pub show_in_menu: Option<bool>,
}

/// A string, a list of strings, or nothing.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// `"y"`/`"n"` or a JSON bool; anything but an explicit no is yes.
pub(crate) fn yes_no(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !matches!(s.trim().to_lowercase().as_str(), "n" | "no" | "false"),
        _ => default,
    }
}

/// Non-blank string or number, rendered as a string.
pub(crate) fn optional_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) if n.as_u64() != Some(0) => Some(n.to_string()),
        _ => None,
    }
}

/// Trimmed, non-blank string.
pub(crate) fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
