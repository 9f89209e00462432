//! jirabulk Jira integration
//!
//! Builds bulk issue-creation payloads and submits them to Jira Cloud.

pub mod adf;
pub mod auth;
pub mod client;
pub mod error;
pub mod payload;
pub mod types;

pub use client::JiraClient;
pub use error::{Error, Result};
pub use payload::build_issues;
pub use types::*;
