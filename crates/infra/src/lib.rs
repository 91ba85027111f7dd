//! # Voicedeck Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client and typed API gateways (call logs, organizations, auth)
//! - Credential storage (platform keychain, in-memory for tests)
//! - Network reachability probing
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `voicedeck-core`
//! - Depends on `voicedeck-domain` and `voicedeck-core`
//! - Contains all "impure" code (I/O, platform APIs)

pub mod api;
pub mod config;
pub mod connectivity;
pub mod credentials;
pub mod http;

// Re-export commonly used items
pub use api::client::{ApiClient, ApiClientConfig};
pub use api::{HttpAuthGateway, HttpCallLogGateway, HttpOrganizationGateway};
pub use connectivity::HttpConnectivityProbe;
pub use credentials::{KeyringCredentialStore, MemoryCredentialStore};
pub use http::HttpClient;
