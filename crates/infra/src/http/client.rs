//! Thin reqwest wrapper with timeout and default-header support.
//!
//! No automatic retry: every surviving call path is user-retriable (pull to
//! refresh, re-scroll), so failures surface immediately instead of being
//! replayed behind the user's back.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;
use voicedeck_domain::VoicedeckError;

/// HTTP client with bounded timeouts.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, VoicedeckError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, VoicedeckError> {
        let request = builder
            .build()
            .map_err(|err| VoicedeckError::Internal(format!("invalid request: {err}")))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(map_transport_error(&err))
            }
        }
    }
}

fn map_transport_error(err: &reqwest::Error) -> VoicedeckError {
    if err.is_timeout() {
        VoicedeckError::Network("request timed out".into())
    } else if err.is_connect() {
        VoicedeckError::Network(format!("connection failed: {err}"))
    } else {
        VoicedeckError::Network(err.to_string())
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(20), user_agent: None, default_headers: None }
    }
}

impl HttpClientBuilder {
    /// Set the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set default headers applied to every request.
    #[must_use]
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be
    /// constructed.
    pub fn build(self) -> Result<HttpClient, VoicedeckError> {
        let mut headers = self.default_headers.unwrap_or_default();
        headers.entry(CONTENT_TYPE).or_insert(HeaderValue::from_static("application/json"));
        headers.entry(ACCEPT).or_insert(HeaderValue::from_static("application/json"));

        let mut builder = ReqwestClient::builder().timeout(self.timeout).default_headers(headers);
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|err| VoicedeckError::Config(format!("failed to build HTTP client: {err}")))?;
        Ok(HttpClient { client })
    }
}
