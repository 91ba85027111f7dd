//! Call-log list and favorite-flag gateway.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use voicedeck_core::CallLogGateway;
use voicedeck_domain::{CallLogPage, CallLogRecord, Result, VoicedeckError};

use super::client::ApiClient;

const CALLS_PATH: &str = "/api/ai/voice/calls/";

/// Response envelope used by the call-log endpoints.
#[derive(Debug, Deserialize)]
struct CallLogEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<CallLogData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CallLogData {
    #[serde(default)]
    docs: Vec<CallLogRecord>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StarBody {
    starred: bool,
    organization_id: String,
}

#[derive(Debug, Deserialize)]
struct StarEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<StarData>,
}

#[derive(Debug, Deserialize)]
struct StarData {
    #[serde(default)]
    starred: bool,
}

/// HTTP implementation of [`CallLogGateway`].
pub struct HttpCallLogGateway {
    client: Arc<ApiClient>,
}

impl HttpCallLogGateway {
    /// Create a gateway over the shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallLogGateway for HttpCallLogGateway {
    #[instrument(skip(self), fields(organization_id = %organization_id, page, query = %query))]
    async fn fetch_page(
        &self,
        organization_id: &str,
        page: u32,
        limit: u32,
        query: &str,
    ) -> Result<CallLogPage> {
        let query_params = [
            ("organization_id", organization_id.to_string()),
            ("assistantId", "All".to_string()),
            ("limit", limit.to_string()),
            ("page", page.to_string()),
            ("q", query.to_string()),
            ("sort", "desc".to_string()),
            ("sortColumn", "updatedAt".to_string()),
        ];

        let envelope: CallLogEnvelope =
            self.client.get(CALLS_PATH, &query_params).await.map_err(VoicedeckError::from)?;

        if !envelope.success {
            return Err(VoicedeckError::Gateway(if envelope.message.is_empty() {
                "failed to fetch call logs".into()
            } else {
                envelope.message
            }));
        }

        let data = envelope.data.unwrap_or(CallLogData { docs: vec![], total: 0, total_pages: 0 });
        Ok(CallLogPage { docs: data.docs, total: data.total, total_pages: data.total_pages })
    }

    #[instrument(skip(self), fields(organization_id = %organization_id, call_id = %call_id))]
    async fn set_starred(
        &self,
        organization_id: &str,
        call_id: &str,
        starred: bool,
    ) -> Result<bool> {
        let path = format!("{CALLS_PATH}{call_id}/star");
        let body = StarBody { starred, organization_id: organization_id.to_string() };

        let envelope: StarEnvelope =
            self.client.patch(&path, &body).await.map_err(VoicedeckError::from)?;

        if !envelope.success {
            return Err(VoicedeckError::Gateway(if envelope.message.is_empty() {
                "failed to update favorite".into()
            } else {
                envelope.message
            }));
        }

        Ok(envelope.data.map_or(starred, |data| data.starred))
    }
}
