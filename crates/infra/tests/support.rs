#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use voicedeck_infra::api::auth::{AnonymousTokenProvider, StoredTokenProvider};
use voicedeck_infra::{ApiClient, ApiClientConfig, MemoryCredentialStore};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_USER_ID: i64 = 7;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt().with_env_filter("voicedeck_infra=debug").try_init();
});

/// Install the test tracing subscriber (idempotent).
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Build an API client pointed at the mock server, authenticated with
/// [`TEST_TOKEN`].
pub fn authed_client(server: &MockServer) -> Arc<ApiClient> {
    init_tracing();
    let store = MemoryCredentialStore::with_session(TEST_TOKEN, TEST_USER_ID);
    let auth = Arc::new(StoredTokenProvider::new(store));
    let config =
        ApiClientConfig { base_url: server.uri(), timeout: Duration::from_secs(5) };
    Arc::new(ApiClient::new(config, auth).expect("api client should build"))
}

/// Build an unauthenticated API client pointed at the mock server.
pub fn anon_client(server: &MockServer) -> Arc<ApiClient> {
    init_tracing();
    let config =
        ApiClientConfig { base_url: server.uri(), timeout: Duration::from_secs(5) };
    Arc::new(
        ApiClient::new(config, Arc::new(AnonymousTokenProvider)).expect("api client should build"),
    )
}

/// JSON for one call-log record as the voice API serves it.
pub fn call_json(id: &str, starred: bool) -> Value {
    json!({
        "id": id,
        "status": "ended",
        "duration": 42.5,
        "cost": 0.07,
        "summary": "caller asked about billing",
        "transcript": [{"role": "assistant", "content": "Hello, how can I help?"}],
        "endedReason": "customer-ended-call",
        "recordingUrl": "https://cdn.example/recordings/rec.wav",
        "startedAt": "2025-03-01T10:00:00Z",
        "endedAt": "2025-03-01T10:00:42Z",
        "starred": starred,
        "assistantId": "asst-1",
        "assistantName": "Support",
        "phoneNumber": "+15550100",
        "organizationId": "org-1"
    })
}

/// Success envelope wrapping a page of call logs.
pub fn page_envelope(docs: Vec<Value>, total: u64, total_pages: u32) -> Value {
    json!({
        "success": true,
        "message": "ok",
        "data": {
            "docs": docs,
            "total": total,
            "totalPages": total_pages
        }
    })
}
