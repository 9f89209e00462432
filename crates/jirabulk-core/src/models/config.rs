//! Application configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub jira: JiraConfig,
    pub tasks: TasksConfig,
    pub env_file: PathBuf,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JiraConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TasksConfig {
    pub backend: PathBuf,
    pub frontend: PathBuf,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.jira.validate()?;
        self.tasks.validate()?;

        if self.env_file.as_os_str().is_empty() {
            return Err(Error::Validation(
                "Environment file path cannot be empty".to_string(),
            ));
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Validation(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Resolve relative file paths against `base`
    pub fn rebase(mut self, base: &Path) -> Self {
        self.tasks.backend = rebase_path(base, self.tasks.backend);
        self.tasks.frontend = rebase_path(base, self.tasks.frontend);
        self.env_file = rebase_path(base, self.env_file);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jira: JiraConfig::default(),
            tasks: TasksConfig::default(),
            env_file: PathBuf::from(".env"),
            log_level: "info".to_string(),
        }
    }
}

impl JiraConfig {
    /// Validate Jira connection settings
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Validation(
                "Jira base URL must start with http:// or https://".to_string(),
            ));
        }

        const MAX_TIMEOUT: u64 = 600;
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT {
            return Err(Error::Validation(format!(
                "Request timeout must be between 1 and {} seconds",
                MAX_TIMEOUT
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the bulk issue creation endpoint
    pub fn bulk_endpoint(&self) -> String {
        format!("{}/rest/api/3/issue/bulk", self.base_url.trim_end_matches('/'))
    }
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: "https://lucjansakowicz.atlassian.net".to_string(),
            timeout_secs: 30,
        }
    }
}

impl TasksConfig {
    /// Validate task file locations
    pub fn validate(&self) -> Result<()> {
        if self.backend.as_os_str().is_empty() {
            return Err(Error::Validation(
                "Backend task file path cannot be empty".to_string(),
            ));
        }

        if self.frontend.as_os_str().is_empty() {
            return Err(Error::Validation(
                "Frontend task file path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            backend: PathBuf::from("backend-tasks.json"),
            frontend: PathBuf::from("frontend-tasks.json"),
        }
    }
}

fn rebase_path(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
