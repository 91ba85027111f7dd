//! Authentication gateway: login, OTP, password reset.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use voicedeck_core::AuthGateway;
use voicedeck_domain::{LoginSession, Result, VoicedeckError};

use super::client::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
    portal: &'a str,
    remember_me: bool,
}

#[derive(Debug, Serialize)]
struct OtpVerifyBody<'a> {
    token: &'a str,
    otp: &'a str,
    purpose: &'a str,
}

#[derive(Debug, Serialize)]
struct OtpGenerateBody<'a> {
    email: &'a str,
    purpose: &'a str,
}

#[derive(Debug, Deserialize)]
struct OtpEnvelope {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordBody<'a> {
    data: ForgotPasswordData<'a>,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordData<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct ForgotPasswordEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
}

/// HTTP implementation of [`AuthGateway`].
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    /// Create a gateway over the shared API client.
    ///
    /// The client should carry an anonymous token provider: these endpoints
    /// run before a session exists.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession> {
        let body = LoginBody { email, password, portal: "mobile", remember_me: true };
        let session: LoginSession =
            self.client.post("/api/login", &body).await.map_err(VoicedeckError::from)?;
        Ok(session)
    }

    #[instrument(skip(self, token, otp))]
    async fn verify_otp(&self, token: &str, otp: &str, purpose: &str) -> Result<()> {
        let body = OtpVerifyBody { token, otp, purpose };
        let envelope: OtpEnvelope =
            self.client.post("/api/otp/verify", &body).await.map_err(VoicedeckError::from)?;

        if envelope.error {
            return Err(VoicedeckError::Auth(if envelope.message.is_empty() {
                "verification failed".into()
            } else {
                envelope.message
            }));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(email = %email))]
    async fn request_otp(&self, email: &str, purpose: &str) -> Result<()> {
        let body = OtpGenerateBody { email, purpose };
        let _: OtpEnvelope =
            self.client.post("/api/otp/generate", &body).await.map_err(VoicedeckError::from)?;
        Ok(())
    }

    #[instrument(skip(self), fields(email = %email))]
    async fn request_password_reset(&self, email: &str) -> Result<()> {
        let body = ForgotPasswordBody { data: ForgotPasswordData { email } };
        let envelope: ForgotPasswordEnvelope = self
            .client
            .post("/api/users/forgot-password/", &body)
            .await
            .map_err(VoicedeckError::from)?;

        if !envelope.success {
            return Err(VoicedeckError::Gateway(if envelope.message.is_empty() {
                "password reset request failed".into()
            } else {
                envelope.message
            }));
        }
        Ok(())
    }
}
