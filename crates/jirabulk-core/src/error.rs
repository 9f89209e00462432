//! Error types for jirabulk core

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid task file {path}: {reason}")]
    TaskFileInvalid { path: PathBuf, reason: String },

    #[error("Invalid environment file {path}: {reason}")]
    EnvFile { path: PathBuf, reason: String },

    #[error("Missing variables in environment file: {}", .missing.join(", "))]
    ConfigurationIncomplete { missing: Vec<String> },

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;
