//! Organization list gateway.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;
use voicedeck_core::OrganizationGateway;
use voicedeck_domain::{Organization, Result, VoicedeckError};

use super::client::ApiClient;

#[derive(Debug, Deserialize)]
struct OrganizationEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    organizations: Vec<Organization>,
}

/// HTTP implementation of [`OrganizationGateway`].
pub struct HttpOrganizationGateway {
    client: Arc<ApiClient>,
}

impl HttpOrganizationGateway {
    /// Create a gateway over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationGateway for HttpOrganizationGateway {
    #[instrument(skip(self))]
    async fn fetch_organizations(&self, user_id: i64) -> Result<Vec<Organization>> {
        let envelope: OrganizationEnvelope = self
            .client
            .get("/api/organizations/list", &[("user_id", user_id.to_string())])
            .await
            .map_err(VoicedeckError::from)?;

        if !envelope.success {
            return Err(VoicedeckError::Gateway("failed to fetch organizations".into()));
        }
        Ok(envelope.organizations)
    }
}
