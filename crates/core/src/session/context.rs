//! Explicit session context object.
//!
//! The session is a value with a lifecycle rather than ambient global
//! state: created at app start, passed to the components that need it,
//! destroyed at logout.

use std::sync::Arc;

use voicedeck_domain::{LoginSession, Result};

use super::ports::CredentialStore;

/// Shared handle to the authenticated session and its persistent backing.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
}

impl SessionContext {
    /// Create a session context over a credential store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// The underlying credential store.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Whether a bearer token is currently persisted.
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.store.access_token().await, Ok(Some(_)))
    }

    /// The signed-in user's id, if any.
    pub async fn user_id(&self) -> Result<Option<i64>> {
        self.store.user_id().await
    }

    /// The persisted login session, if any.
    pub async fn login_session(&self) -> Result<Option<LoginSession>> {
        self.store.login_session().await
    }

    /// The persisted selected organization id, if any.
    pub async fn selected_organization_id(&self) -> Result<Option<String>> {
        self.store.selected_organization_id().await
    }

    /// Persist the selected organization id.
    pub async fn set_selected_organization_id(&self, organization_id: &str) -> Result<()> {
        self.store.set_selected_organization_id(organization_id).await
    }

    /// Destroy the session: wipe all persisted authentication material.
    pub async fn clear(&self) -> Result<()> {
        self.store.clear_auth().await
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
