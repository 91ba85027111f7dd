//! API client: base URL, bearer injection, JSON decoding.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API (e.g., "https://stage.rossy.ai").
    pub base_url: String,
    /// Timeout for API requests.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self { base_url: "https://stage.rossy.ai".to_string(), timeout: Duration::from_secs(20) }
    }
}

/// HTTP API client shared by the typed gateways.
pub struct ApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url)
            .map_err(|err| ApiError::Config(format!("invalid base URL: {err}")))?;

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HttpClient: {err}")))?;

        Ok(Self { http_client, auth, config })
    }

    /// Execute a GET request with query parameters.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .http_client
            .request(Method::GET, self.url(path))
            .query(query);
        self.execute(path, request).await
    }

    /// Execute a POST request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http_client.request(Method::POST, self.url(path)).json(body);
        self.execute(path, request).await
    }

    /// Execute a PATCH request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http_client.request(Method::PATCH, self.url(path)).json(body);
        self.execute(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        mut request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        if let Some(token) = self.auth.access_token().await? {
            request = request.bearer_auth(token);
        }

        let response = match tokio::time::timeout(
            self.config.timeout,
            self.http_client.send(request),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(ApiError::Network(err.to_string())),
            Err(_) => return Err(ApiError::Timeout(self.config.timeout)),
        };

        let status = response.status();
        let url = self.url(path);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &url, body));
        }

        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| ApiError::Client(format!("{url}: empty body for typed response")));
        }

        let parsed = response
            .json()
            .await
            .map_err(|err| ApiError::Client(format!("{url}: failed to parse response: {err}")))?;
        debug!(path = %path, "request successful");
        Ok(parsed)
    }
}
