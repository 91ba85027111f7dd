//! Network reachability probing.
//!
//! `HttpConnectivityProbe` issues a lightweight request against a probe
//! endpoint and reports reachability. Probe failures are a state, not an
//! error: transport failures and timeouts report offline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};
use voicedeck_core::ConnectivityProbe;
use voicedeck_domain::{Connectivity, VoicedeckError};

use crate::http::HttpClient;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP implementation of [`ConnectivityProbe`].
pub struct HttpConnectivityProbe {
    client: HttpClient,
    probe_url: String,
}

impl HttpConnectivityProbe {
    /// Create a probe against the given URL.
    ///
    /// The API base URL is a reasonable target: any response, even an
    /// error status, proves the network path is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(probe_url: impl Into<String>) -> Result<Self, VoicedeckError> {
        let client = HttpClient::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self { client, probe_url: probe_url.into() })
    }

    /// Create a probe reusing an existing HTTP client.
    pub fn with_client(client: HttpClient, probe_url: impl Into<String>) -> Self {
        Self { client, probe_url: probe_url.into() }
    }
}

#[async_trait]
impl ConnectivityProbe for HttpConnectivityProbe {
    #[instrument(skip(self))]
    async fn check(&self) -> Connectivity {
        let request = self.client.request(Method::HEAD, self.probe_url.clone());

        match tokio::time::timeout(PROBE_TIMEOUT, self.client.send(request)).await {
            // Any HTTP response means the network path is reachable.
            Ok(Ok(_)) => Connectivity::online(),
            Ok(Err(err)) => {
                debug!(error = %err, "connectivity probe failed");
                Connectivity::offline()
            }
            Err(_) => {
                debug!("connectivity probe timed out");
                Connectivity::offline()
            }
        }
    }
}
