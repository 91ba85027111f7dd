//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Voicedeck
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum VoicedeckError {
    #[error("Network error: {0}")]
    Network(String),

    /// Connectivity was absent before a remote call was attempted. Never
    /// retried automatically; surfaced to the user as-is.
    #[error("No internet connection")]
    NoConnectivity,

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VoicedeckError {
    /// Whether this error stems from missing network reachability.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::NoConnectivity)
    }
}

/// Result type alias for Voicedeck operations
pub type Result<T> = std::result::Result<T, VoicedeckError>;
