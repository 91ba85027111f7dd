//! Bearer-token provisioning for API requests.
//!
//! The controller and coordinator never see raw tokens; the API client
//! pulls them from here at request time.

use std::sync::Arc;

use async_trait::async_trait;
use voicedeck_core::CredentialStore;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the bearer token to attach, or `None` for unauthenticated
    /// requests (login, OTP).
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Token provider backed by the credential store.
pub struct StoredTokenProvider {
    store: Arc<dyn CredentialStore>,
}

impl StoredTokenProvider {
    /// Create a provider reading from the given store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccessTokenProvider for StoredTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        self.store
            .access_token()
            .await
            .map_err(|err| ApiError::Auth(format!("failed to read token: {err}")))
    }
}

/// Provider that never attaches a token. Used for the pre-login endpoints.
pub struct AnonymousTokenProvider;

#[async_trait]
impl AccessTokenProvider for AnonymousTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}
