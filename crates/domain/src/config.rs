//! Configuration structures
//!
//! Loaded by the infra config loader from environment variables or a
//! JSON/TOML file; every field carries a usable default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN, DEFAULT_PAGE_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Remote API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://stage.rossy.ai").
    pub base_url: String,
    /// Remote call timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://stage.rossy.ai".to_string(),
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Paginated search tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Records fetched per page.
    pub page_limit: u32,
    /// Quiet interval in milliseconds before a filtered fetch fires.
    pub debounce_ms: u64,
    /// Minimum query length for a filtered fetch; shorter queries fetch
    /// unfiltered.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl SearchConfig {
    /// Debounce quiet interval as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}
