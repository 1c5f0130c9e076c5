//! Line-oriented console transport.
//!
//! Reads commands from stdin and forwards them to the main application.
//! Replies are printed by the application, one per action.

use crate::{AppCommand, AppError, AppResult, app_command::USAGE};

use std::{io::BufRead, panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Forwards parsed stdin lines into the command channel.
pub struct ConsoleTransport {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ConsoleTransport {
    /// Create a transport feeding `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Run the console loop until shutdown or end of input.
    #[instrument(skip_all)]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);

        // Stdin has no async-cancellable read, so one blocking task owns it.
        // It stops at end of input or when line_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });

        println!("deskhand ready, type \"help\" for commands");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Console transport shutting down");
                    break;
                }
                line = line_rx.recv() => match line {
                    Some(line) => self.forward_line(&line).await?,
                    None => {
                        info!("Console input closed");
                        self.send(AppCommand::Shutdown).await?;
                        break;
                    }
                }
            }
        }

        drop(line_rx);

        // Best-effort join: the reader may be parked in a read until the next line.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Console reader stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Console reader task panicked"),
            Err(_) => debug!("Console reader did not stop within timeout, will be cleaned up on exit"),
        }

        Ok(())
    }

    /// Parse one line and forward it. Unparseable lines are answered here.
    #[instrument(skip(self))]
    pub async fn forward_line(&self, line: &str) -> AppResult<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match AppCommand::parse(line) {
            Ok(command) => self.send(command).await,
            Err(AppError::InvalidCommand { reason, .. }) => {
                warn!(line = %line, reason = %reason, "Rejected console line");
                println!("error: {reason}\n{USAGE}");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to forward console command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
