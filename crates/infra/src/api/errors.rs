//! API-specific error types

use std::time::Duration;

use thiserror::Error;
use voicedeck_domain::VoicedeckError;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Classify a non-success HTTP status into an API error.
    pub fn from_status(status: reqwest::StatusCode, url: &str, body: String) -> Self {
        let detail = if body.is_empty() { status.to_string() } else { body };
        match status.as_u16() {
            401 | 403 => Self::Auth(format!("{url}: {detail}")),
            400..=499 => Self::Client(format!("{url}: {detail}")),
            _ => Self::Server(format!("{url}: {detail}")),
        }
    }
}

impl From<ApiError> for VoicedeckError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(msg) => Self::Auth(msg),
            ApiError::Server(msg) | ApiError::Client(msg) => Self::Gateway(msg),
            ApiError::Network(msg) => Self::Network(msg),
            ApiError::Config(msg) => Self::Config(msg),
            ApiError::Timeout(duration) => {
                Self::Network(format!("request timed out after {duration:?}"))
            }
        }
    }
}
