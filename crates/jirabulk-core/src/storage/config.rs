//! Configuration file loading

use crate::{models::Config, Error, Result};
use std::path::{Path, PathBuf};

pub struct ConfigStorage {
    config_path: PathBuf,
}

impl ConfigStorage {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load and validate the config; a missing or blank file yields defaults.
    ///
    /// Relative paths inside the config are resolved against the directory
    /// containing the config file.
    pub fn load(&self) -> Result<Config> {
        let base = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(Config::default().rebase(&base));
        }

        let content = std::fs::read_to_string(&self.config_path)?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(Config::default().rebase(&base));
        }

        let config: Config = serde_json::from_str(&content).map_err(|e| Error::Config {
            path: self.config_path.clone(),
            reason: e.to_string(),
        })?;
        config.validate()?;

        tracing::info!(path = %self.config_path.display(), "Loaded config file");
        Ok(config.rebase(&base))
    }
}
