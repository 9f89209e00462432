pub mod config;
pub mod env;
pub mod task;

pub use config::ConfigStorage;
pub use env::EnvSource;
pub use task::TaskStorage;

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_VAR: &str = "JIRABULK_CONFIG";

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "jirabulk.json";

pub fn get_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}
