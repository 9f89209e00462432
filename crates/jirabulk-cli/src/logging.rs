//! Tracing setup
//!
//! The terminal belongs to the prompts, so events go to a JSON log file.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "jirabulk.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the global subscriber; `RUST_LOG` overrides `default_level`.
pub fn setup_logging(default_level: &str) -> Result<PathBuf> {
    let log_path = log_path();
    let log_file = std::fs::File::create(&log_path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(filter)
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(log_path)
}
