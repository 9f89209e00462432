//! Error types for Jira integration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("{status} {body}")]
    ApiRejected { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
