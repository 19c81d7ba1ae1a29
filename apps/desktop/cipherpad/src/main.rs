use cipherpad::error::CipherpadError;
use cipherpad::logger::initialize as LoggerInitialize;
use cipherpad::repl;
use cipherpad::surface::TerminalSurface;

use client_core::config::AppConfig;
use client_core::controller::{CipherController, Surface};
use client_core::transform_client::TransformClient;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::info;

const APP_DIR_NAME: &str = "cipherpad";

#[tokio::main]
async fn main() -> Result<(), CipherpadError> {
    // Resolve and create the log directory
    let log_dir = dirs::data_local_dir()
        .ok_or_else(|| CipherpadError::App {
            message: String::from("Failed to resolve local data directory"),
            location: ErrorLocation::from(Location::caller()),
        })?
        .join(APP_DIR_NAME)
        .join("logs");

    create_dir_all(&log_dir).map_err(|e| CipherpadError::App {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Cipherpad starting");
    info!("Log directory: {}", log_dir.display());

    // Load config (defaults when no file exists yet)
    let config_dir = dirs::config_dir()
        .ok_or_else(|| CipherpadError::App {
            message: String::from("Failed to resolve config directory"),
            location: ErrorLocation::from(Location::caller()),
        })?
        .join(APP_DIR_NAME);

    let config = AppConfig::load(&config_dir).map_err(|e| CipherpadError::Core {
        message: format!("Failed to load config: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("Transform server: {}", config.server.base_url);

    // Wire the controller over a terminal surface
    let client = TransformClient::with_timeout(
        &config.server.base_url,
        Duration::from_secs(config.server.request_timeout_secs),
    )
    .map_err(|e| CipherpadError::Core {
        message: format!("Failed to build transform client: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let surface = Arc::new(TerminalSurface::new());
    let controller = CipherController::new(Arc::clone(&surface) as Arc<dyn Surface>, client);

    repl::run(&controller, &surface).await?;

    info!("Cipherpad exiting");
    Ok(())
}
