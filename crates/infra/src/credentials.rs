//! Credential store implementations.
//!
//! `KeyringCredentialStore` persists secrets in the platform keychain
//! (macOS Keychain, Windows Credential Manager, Linux Secret Service).
//! `MemoryCredentialStore` backs tests and headless tooling.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use keyring::Entry;
use parking_lot::Mutex;
use tracing::debug;
use voicedeck_core::CredentialStore;
use voicedeck_domain::constants::{
    KEY_ACCESS_TOKEN, KEY_LOGIN_SESSION, KEY_ROLE, KEY_SELECTED_ORGANIZATION_ID, KEY_USER,
    KEY_USER_ID,
};
use voicedeck_domain::{LoginSession, Result, VoicedeckError};

const ALL_KEYS: &[&str] = &[
    KEY_ACCESS_TOKEN,
    KEY_USER,
    KEY_USER_ID,
    KEY_ROLE,
    KEY_LOGIN_SESSION,
    KEY_SELECTED_ORGANIZATION_ID,
];

/// Platform-keychain credential store.
pub struct KeyringCredentialStore {
    service: String,
}

impl KeyringCredentialStore {
    /// Create a store namespaced under `service` (e.g., "voicedeck").
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    async fn get(&self, key: &'static str) -> Result<Option<String>> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, key)
                .map_err(|err| VoicedeckError::Storage(err.to_string()))?;
            match entry.get_password() {
                Ok(value) => Ok(Some(value)),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(err) => Err(VoicedeckError::Storage(err.to_string())),
            }
        })
        .await
        .map_err(|err| VoicedeckError::Internal(format!("keychain task failed: {err}")))?
    }

    async fn set(&self, key: &'static str, value: String) -> Result<()> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, key)
                .map_err(|err| VoicedeckError::Storage(err.to_string()))?;
            entry.set_password(&value).map_err(|err| VoicedeckError::Storage(err.to_string()))
        })
        .await
        .map_err(|err| VoicedeckError::Internal(format!("keychain task failed: {err}")))?
    }

    async fn delete(&self, key: &'static str) -> Result<()> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, key)
                .map_err(|err| VoicedeckError::Storage(err.to_string()))?;
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(err) => Err(VoicedeckError::Storage(err.to_string())),
            }
        })
        .await
        .map_err(|err| VoicedeckError::Internal(format!("keychain task failed: {err}")))?
    }
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn access_token(&self) -> Result<Option<String>> {
        self.get(KEY_ACCESS_TOKEN).await
    }

    async fn set_access_token(&self, token: &str) -> Result<()> {
        self.set(KEY_ACCESS_TOKEN, token.to_string()).await
    }

    async fn user_id(&self) -> Result<Option<i64>> {
        match self.get(KEY_USER_ID).await? {
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|err| VoicedeckError::Storage(format!("corrupt user id: {err}"))),
            None => Ok(None),
        }
    }

    async fn set_user_id(&self, user_id: i64) -> Result<()> {
        self.set(KEY_USER_ID, user_id.to_string()).await
    }

    async fn login_session(&self) -> Result<Option<LoginSession>> {
        match self.get(KEY_LOGIN_SESSION).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| VoicedeckError::Storage(format!("corrupt login session: {err}"))),
            None => Ok(None),
        }
    }

    async fn set_login_session(&self, session: &LoginSession) -> Result<()> {
        let raw = serde_json::to_string(session)
            .map_err(|err| VoicedeckError::Internal(err.to_string()))?;
        self.set(KEY_LOGIN_SESSION, raw).await
    }

    async fn selected_organization_id(&self) -> Result<Option<String>> {
        self.get(KEY_SELECTED_ORGANIZATION_ID).await
    }

    async fn set_selected_organization_id(&self, organization_id: &str) -> Result<()> {
        self.set(KEY_SELECTED_ORGANIZATION_ID, organization_id.to_string()).await
    }

    async fn clear_auth(&self) -> Result<()> {
        debug!("clearing persisted credentials");
        for key in ALL_KEYS {
            self.delete(key).await?;
        }
        Ok(())
    }
}

/// In-memory credential store for tests and headless tooling.
#[derive(Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<&'static str, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: an `Arc`'d store pre-seeded with a token and user id.
    #[must_use]
    pub fn with_session(token: &str, user_id: i64) -> Arc<Self> {
        let store = Self::new();
        store.values.lock().insert(KEY_ACCESS_TOKEN, token.to_string());
        store.values.lock().insert(KEY_USER_ID, user_id.to_string());
        Arc::new(store)
    }

    fn get(&self, key: &'static str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: String) {
        self.values.lock().insert(key, value);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.get(KEY_ACCESS_TOKEN))
    }

    async fn set_access_token(&self, token: &str) -> Result<()> {
        self.set(KEY_ACCESS_TOKEN, token.to_string());
        Ok(())
    }

    async fn user_id(&self) -> Result<Option<i64>> {
        Ok(self.get(KEY_USER_ID).and_then(|raw| raw.parse().ok()))
    }

    async fn set_user_id(&self, user_id: i64) -> Result<()> {
        self.set(KEY_USER_ID, user_id.to_string());
        Ok(())
    }

    async fn login_session(&self) -> Result<Option<LoginSession>> {
        match self.get(KEY_LOGIN_SESSION) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| VoicedeckError::Storage(format!("corrupt login session: {err}"))),
            None => Ok(None),
        }
    }

    async fn set_login_session(&self, session: &LoginSession) -> Result<()> {
        let raw = serde_json::to_string(session)
            .map_err(|err| VoicedeckError::Internal(err.to_string()))?;
        self.set(KEY_LOGIN_SESSION, raw);
        Ok(())
    }

    async fn selected_organization_id(&self) -> Result<Option<String>> {
        Ok(self.get(KEY_SELECTED_ORGANIZATION_ID))
    }

    async fn set_selected_organization_id(&self, organization_id: &str) -> Result<()> {
        self.set(KEY_SELECTED_ORGANIZATION_ID, organization_id.to_string());
        Ok(())
    }

    async fn clear_auth(&self) -> Result<()> {
        self.values.lock().clear();
        Ok(())
    }
}
