//! jirabulk core
//!
//! Task model, configuration, credential resolution and task selection shared
//! by the Jira client and the interactive CLI.

pub mod credentials;
pub mod error;
pub mod models;
pub mod prompt;
pub mod selection;
pub mod storage;

pub use error::{Error, Result};
