//! Reachability probe behavior against a live mock server.

#[path = "support.rs"]
mod support;

use voicedeck_core::ConnectivityProbe;
use voicedeck_infra::HttpConnectivityProbe;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn reachable_server_reports_online() {
    support::init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("HEAD")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

    let probe = HttpConnectivityProbe::new(server.uri()).unwrap();
    assert!(probe.check().await.is_online());
}

#[tokio::test]
async fn error_status_still_proves_reachability() {
    support::init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("HEAD")).respond_with(ResponseTemplate::new(503)).mount(&server).await;

    let probe = HttpConnectivityProbe::new(server.uri()).unwrap();
    assert!(probe.check().await.is_online());
}

#[tokio::test]
async fn unreachable_host_reports_offline_without_error() {
    support::init_tracing();

    // Nothing listens on this port.
    let probe = HttpConnectivityProbe::new("http://127.0.0.1:9").unwrap();
    let connectivity = probe.check().await;

    assert!(!connectivity.is_online());
}
