use crate::{AppError, AppResult};

use std::panic::Location;

use deskhand_core::{ActionRequest, MediaAction, SearchEngine};
use error_location::ErrorLocation;

/// Console help text.
pub(crate) const USAGE: &str = "\
commands:
  app <key>          toggle or launch an app
  combo <key>        run a combo
  media <action>     volume_up, volume_down, volume_mute, play_pause, next, prev,
                     arrow_up, arrow_down, arrow_left, arrow_right, page_up,
                     page_down, space
  rec                start or stop screen recording
  clip send|keep     deliver or keep the last clip
  search <text>      open a link or search the web
  engine <name>      google, yandex or bing
  list               show menu entries
  status             show recording and search state
  reload             re-read descriptor files
  quit";

/// Commands sent from the console transport to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Hand one request to the engine.
    Dispatch(ActionRequest),
    /// List menu apps and combos.
    List,
    /// Report recording and search state.
    Status,
    /// Re-read the descriptor files and swap the store.
    Reload,
    /// Print usage.
    Help,
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Parse one console line.
    #[track_caller]
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_lowercase().as_str() {
            "app" => AppCommand::Dispatch(ActionRequest::App(required(verb, rest)?)),
            "combo" => AppCommand::Dispatch(ActionRequest::Combo(required(verb, rest)?)),
            "media" => {
                let action = rest.parse::<MediaAction>().map_err(invalid)?;
                AppCommand::Dispatch(ActionRequest::Media(action))
            }
            "rec" => AppCommand::Dispatch(ActionRequest::ToggleRecording),
            "clip" => match rest.to_lowercase().as_str() {
                "send" => AppCommand::Dispatch(ActionRequest::SendLastClip),
                "keep" => AppCommand::Dispatch(ActionRequest::KeepLastClip),
                other => return Err(invalid(format!("clip expects send or keep, got {other:?}"))),
            },
            "search" => AppCommand::Dispatch(ActionRequest::Search(required(verb, rest)?)),
            "engine" => {
                let engine = rest.parse::<SearchEngine>().map_err(invalid)?;
                AppCommand::Dispatch(ActionRequest::SetSearchEngine(engine))
            }
            "list" => AppCommand::List,
            "status" => AppCommand::Status,
            "reload" => AppCommand::Reload,
            "help" | "?" => AppCommand::Help,
            "quit" | "exit" => AppCommand::Shutdown,
            other => return Err(invalid(format!("unknown command {other:?}"))),
        };

        Ok(command)
    }
}

#[track_caller]
fn required(verb: &str, rest: &str) -> AppResult<String> {
    if rest.is_empty() {
        return Err(invalid(format!("{verb} needs an argument")));
    }
    Ok(rest.to_string())
}

#[track_caller]
fn invalid(reason: String) -> AppError {
    AppError::InvalidCommand {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
