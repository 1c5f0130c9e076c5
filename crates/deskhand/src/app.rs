use crate::{AppCommand, AppError, AppResult, app_command::USAGE, config::Config, load_descriptors};

use std::{fmt::Write, panic::Location, sync::Arc};

use deskhand_core::{ActionOutcome, ActionRequest, OsEngine, RecordingState};
use error_location::ErrorLocation;
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{error, info, instrument};

/// Main application state.
///
/// Owns the engine behind one mutex. Dispatch itself is synchronous and may
/// sleep (layout settle, recording settle), so it runs on the blocking pool.
pub struct App {
    pub(crate) engine: Arc<Mutex<OsEngine>>,
    pub(crate) config: Config,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Deskhand starting");

        while let Some(command) = self.command_rx.recv().await {
            if let AppCommand::Shutdown = command {
                info!("Shutdown requested");
                break;
            }

            match self.handle_command(command).await {
                Ok(reply) => println!("{reply}"),
                Err(e) => {
                    error!(error = ?e, "Failed to handle command");
                    println!("error: {e}");
                }
            }
        }

        let _ = self.shutdown_tx.send(true);
        info!("Deskhand shut down successfully");

        Ok(())
    }

    /// Produce the single reply for one command.
    #[instrument(skip(self))]
    async fn handle_command(&self, command: AppCommand) -> AppResult<String> {
        let reply = match command {
            AppCommand::Dispatch(request) => self.dispatch(request).await?.to_string(),
            AppCommand::Reload => {
                let store = load_descriptors(&self.config.paths)?;
                self.dispatch(ActionRequest::Reload(store)).await?.to_string()
            }
            AppCommand::List => self.list().await,
            AppCommand::Status => self.status().await,
            AppCommand::Help | AppCommand::Shutdown => USAGE.to_string(),
        };

        Ok(reply)
    }

    async fn dispatch(&self, request: ActionRequest) -> AppResult<ActionOutcome> {
        let engine = Arc::clone(&self.engine);

        tokio::task::spawn_blocking(move || engine.blocking_lock().dispatch(request))
            .await
            .map_err(|e| AppError::DispatchTaskFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn list(&self) -> String {
        let engine = self.engine.lock().await;
        let store = engine.store();
        let mut reply = String::from("apps:");

        for app in store.menu_apps() {
            let _ = write!(reply, "\n  {:<16} {}", app.key, app.name);
        }

        reply.push_str("\ncombos:");
        for combo in store.menu_combos() {
            let _ = write!(reply, "\n  {:<16} {}", combo.key, combo.name);
        }

        reply
    }

    async fn status(&self) -> String {
        let engine = self.engine.lock().await;

        let recording = match engine.recording_state() {
            RecordingState::Idle => "idle".to_string(),
            RecordingState::Recording {
                started_at,
                session_id,
            } => {
                let secs = started_at.elapsed().map(|d| d.as_secs()).unwrap_or_default();
                format!("recording for {secs}s (session {session_id})")
            }
        };

        let clip = engine
            .last_clip()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "none".to_string());

        let search = engine.search_preferences();
        let browser = search
            .preferred_browser_key
            .as_deref()
            .unwrap_or("default");

        format!(
            "recording: {recording}\nlast clip: {clip}\nsearch: {} in {browser}\nbase dir: {}",
            search.engine,
            engine.base_dir().display()
        )
    }
}
