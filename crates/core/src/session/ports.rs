//! Port interfaces for session and connectivity concerns
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use voicedeck_domain::{Connectivity, LoginSession, Result};

/// Trait for the secure persistent key/value store holding credentials and
/// the selected organization id.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Get the persisted bearer token, if any.
    async fn access_token(&self) -> Result<Option<String>>;

    /// Persist the bearer token.
    async fn set_access_token(&self, token: &str) -> Result<()>;

    /// Get the signed-in user's id, if any.
    async fn user_id(&self) -> Result<Option<i64>>;

    /// Persist the signed-in user's id.
    async fn set_user_id(&self, user_id: i64) -> Result<()>;

    /// Get the full persisted login session, if any.
    async fn login_session(&self) -> Result<Option<LoginSession>>;

    /// Persist the full login session (token, profile, roles).
    async fn set_login_session(&self, session: &LoginSession) -> Result<()>;

    /// Get the persisted selected organization id, if any.
    async fn selected_organization_id(&self) -> Result<Option<String>>;

    /// Persist the selected organization id under its stable key.
    async fn set_selected_organization_id(&self, organization_id: &str) -> Result<()>;

    /// Remove all authentication material. The selected organization id is
    /// cleared with it; it is meaningless without a session.
    async fn clear_auth(&self) -> Result<()>;
}

/// Trait for the network reachability oracle consulted before every
/// remote call.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Report current reachability. Probe failures map to the offline
    /// state; this call never errors.
    async fn check(&self) -> Connectivity;
}

/// Trait for the remote authentication endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a login session.
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession>;

    /// Verify a one-time passcode issued for `purpose`.
    async fn verify_otp(&self, token: &str, otp: &str, purpose: &str) -> Result<()>;

    /// Request a new one-time passcode for `purpose`.
    async fn request_otp(&self, email: &str, purpose: &str) -> Result<()>;

    /// Trigger the forgot-password flow for the given address.
    async fn request_password_reset(&self, email: &str) -> Result<()>;
}
