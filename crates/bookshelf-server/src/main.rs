//! Bookshelf API server binary.
//!
//! Wires together configuration, logging, the book store, and the HTTP
//! server, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `bookshelf-config.yaml` (or defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Build the book store, optionally seeded with sample books
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use bookshelf_api::{start_server, AppState, ServerConfig};
use bookshelf_core::{BookStore, BookshelfConfig, LogFormat, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Path of the optional configuration file, relative to the working
/// directory.
const CONFIG_PATH: &str = "bookshelf-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration. Logging is not up yet, so remember whether
    //    the file was found and report it afterwards.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("bookshelf-server starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
    }

    // 3. Build the store.
    let store = if config.store.seed_samples {
        BookStore::with_samples()
    } else {
        BookStore::new()
    };
    info!(
        seeded = config.store.seed_samples,
        books = store.count().await,
        "Book store initialized"
    );

    // 4. Serve until Ctrl-C.
    let server_config = ServerConfig::from_sections(&config.server, &config.api);
    let state = Arc::new(AppState::new(store));
    start_server(&server_config, state, shutdown_signal())
        .await
        .map_err(ServerBinError::from)?;

    info!("bookshelf-server exited cleanly");
    Ok(())
}

/// Load configuration from [`CONFIG_PATH`] if it exists, else defaults.
///
/// Returns the config and whether it came from the file.
fn load_config() -> Result<(BookshelfConfig, bool), ServerBinError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((BookshelfConfig::from_file(config_path)?, true))
    } else {
        Ok((BookshelfConfig::from_env()?, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), ServerBinError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level).map_err(|e| ServerBinError::LogFilter {
            filter: logging.level.clone(),
            message: e.to_string(),
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
    Ok(())
}

/// Resolve when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
    }
}
