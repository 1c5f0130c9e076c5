//! Deskhand: remote control of a desktop host through named actions.

mod app;
mod app_command;
mod config;
mod console;
mod descriptor_loader;
mod error;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console::ConsoleTransport,
    descriptor_loader::load_descriptors,
    error::{AppError, Result as AppResult},
};

use crate::config::{Config, ConfigPreferences};

use std::sync::Arc;

use deskhand_core::OsEngine;
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{error, info};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("deskhand=debug,deskhand_core=debug")
        .init();

    let config_path = match Config::default_path() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to resolve config path: {:?}", e);
            std::process::exit(1);
        }
    };

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let store = match load_descriptors(&config.paths) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load descriptors: {:?}", e);
            std::process::exit(1);
        }
    };

    let engine = OsEngine::with_os_backends(
        store,
        config.to_engine_settings(),
        Box::new(ConfigPreferences::new(config.clone(), config_path.clone())),
    );
    let engine = Arc::new(Mutex::new(engine));

    info!(config_path = ?config_path, "Engine ready");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let console = ConsoleTransport::new(command_tx);

        let app = App {
            engine,
            config,
            command_rx,
            shutdown_tx,
        };

        tokio::join!(
            async {
                if let Err(e) = console.run(shutdown_rx).await {
                    error!(error = ?e, "Console transport error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );
    });

    // The stdin reader may still be parked in a read.
    rt.shutdown_background();
}
