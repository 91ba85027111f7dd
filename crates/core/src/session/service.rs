//! Authentication flows layered on the session context.

use std::sync::Arc;

use tracing::{info, warn};
use voicedeck_domain::{LoginSession, Result, VoicedeckError};

use super::context::SessionContext;
use super::ports::{AuthGateway, ConnectivityProbe};

/// Drives login, OTP verification, and logout against the auth gateway,
/// persisting the outcome into the session context.
pub struct SessionService {
    auth: Arc<dyn AuthGateway>,
    connectivity: Arc<dyn ConnectivityProbe>,
    session: SessionContext,
}

impl SessionService {
    /// Create a new session service.
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        connectivity: Arc<dyn ConnectivityProbe>,
        session: SessionContext,
    ) -> Self {
        Self { auth, connectivity, session }
    }

    /// The session context this service mutates.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Log in and persist the resulting session.
    ///
    /// # Errors
    ///
    /// `NoConnectivity` when offline, `Auth`/`Gateway` when the remote call
    /// fails, `Storage` when the session cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession> {
        self.ensure_online().await?;

        let login = self.auth.login(email, password).await?;

        self.session.store().set_login_session(&login).await?;
        self.session.store().set_access_token(&login.access_token).await?;
        self.session.store().set_user_id(login.user_data.id).await?;

        info!(user_id = login.user_data.id, "login succeeded");
        Ok(login)
    }

    /// Verify a one-time passcode.
    pub async fn verify_otp(&self, token: &str, otp: &str, purpose: &str) -> Result<()> {
        self.ensure_online().await?;
        self.auth.verify_otp(token, otp, purpose).await
    }

    /// Request a fresh one-time passcode.
    pub async fn request_otp(&self, email: &str, purpose: &str) -> Result<()> {
        self.ensure_online().await?;
        self.auth.request_otp(email, purpose).await
    }

    /// Start the forgot-password flow.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        self.ensure_online().await?;
        self.auth.request_password_reset(email).await
    }

    /// Log out: destroy all persisted session state.
    pub async fn logout(&self) -> Result<()> {
        let result = self.session.clear().await;
        if let Err(err) = &result {
            warn!(error = %err, "failed to clear persisted session on logout");
        }
        result
    }

    async fn ensure_online(&self) -> Result<()> {
        if self.connectivity.check().await.is_online() {
            Ok(())
        } else {
            Err(VoicedeckError::NoConnectivity)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use voicedeck_domain::{Connectivity, UserProfile};

    use super::*;
    use crate::session::ports::CredentialStore;

    #[derive(Default)]
    struct MemoryStore {
        token: Mutex<Option<String>>,
        user_id: Mutex<Option<i64>>,
        session: Mutex<Option<LoginSession>>,
        selected_org: Mutex<Option<String>>,
    }

    #[async_trait]
    impl CredentialStore for MemoryStore {
        async fn access_token(&self) -> Result<Option<String>> {
            Ok(self.token.lock().clone())
        }
        async fn set_access_token(&self, token: &str) -> Result<()> {
            *self.token.lock() = Some(token.to_string());
            Ok(())
        }
        async fn user_id(&self) -> Result<Option<i64>> {
            Ok(*self.user_id.lock())
        }
        async fn set_user_id(&self, user_id: i64) -> Result<()> {
            *self.user_id.lock() = Some(user_id);
            Ok(())
        }
        async fn login_session(&self) -> Result<Option<LoginSession>> {
            Ok(self.session.lock().clone())
        }
        async fn set_login_session(&self, session: &LoginSession) -> Result<()> {
            *self.session.lock() = Some(session.clone());
            Ok(())
        }
        async fn selected_organization_id(&self) -> Result<Option<String>> {
            Ok(self.selected_org.lock().clone())
        }
        async fn set_selected_organization_id(&self, organization_id: &str) -> Result<()> {
            *self.selected_org.lock() = Some(organization_id.to_string());
            Ok(())
        }
        async fn clear_auth(&self) -> Result<()> {
            *self.token.lock() = None;
            *self.user_id.lock() = None;
            *self.session.lock() = None;
            *self.selected_org.lock() = None;
            Ok(())
        }
    }

    struct FakeAuth;

    #[async_trait]
    impl AuthGateway for FakeAuth {
        async fn login(&self, email: &str, _password: &str) -> Result<LoginSession> {
            Ok(LoginSession {
                access_token: "tok-123".into(),
                user_data: UserProfile {
                    id: 42,
                    first_name: "Pat".into(),
                    last_name: "Doe".into(),
                    email: email.into(),
                    email_verified: true,
                },
                role: vec![],
            })
        }
        async fn verify_otp(&self, _token: &str, otp: &str, _purpose: &str) -> Result<()> {
            if otp == "000000" {
                Err(VoicedeckError::Auth("invalid code".into()))
            } else {
                Ok(())
            }
        }
        async fn request_otp(&self, _email: &str, _purpose: &str) -> Result<()> {
            Ok(())
        }
        async fn request_password_reset(&self, _email: &str) -> Result<()> {
            Ok(())
        }
    }

    struct FakeProbe(AtomicBool);

    #[async_trait]
    impl ConnectivityProbe for FakeProbe {
        async fn check(&self) -> Connectivity {
            if self.0.load(Ordering::SeqCst) {
                Connectivity::online()
            } else {
                Connectivity::offline()
            }
        }
    }

    fn service(online: bool) -> (SessionService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let session = SessionContext::new(store.clone());
        let svc =
            SessionService::new(Arc::new(FakeAuth), Arc::new(FakeProbe(AtomicBool::new(online))), session);
        (svc, store)
    }

    #[tokio::test]
    async fn login_persists_token_user_and_session() {
        let (svc, store) = service(true);
        let login = svc.login("pat@example.com", "hunter2").await.unwrap();
        assert_eq!(login.user_data.id, 42);
        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("tok-123"));
        assert_eq!(store.user_id().await.unwrap(), Some(42));
        assert!(store.login_session().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn login_refused_offline() {
        let (svc, store) = service(false);
        let err = svc.login("pat@example.com", "hunter2").await.unwrap_err();
        assert_eq!(err, VoicedeckError::NoConnectivity);
        assert!(store.access_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn logout_clears_everything() {
        let (svc, store) = service(true);
        svc.login("pat@example.com", "hunter2").await.unwrap();
        store.set_selected_organization_id("org-7").await.unwrap();

        svc.logout().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.selected_organization_id().await.unwrap().is_none());
        assert!(!svc.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn otp_failure_propagates() {
        let (svc, _) = service(true);
        let err = svc.verify_otp("tok", "000000", "registration").await.unwrap_err();
        assert!(matches!(err, VoicedeckError::Auth(_)));
    }
}
