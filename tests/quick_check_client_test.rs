//! Integration tests for the ssl-checker.io client against a mock
//! HTTP server.

use std::time::Duration;

use mockito::Server;
use sslprobe::domain::ports::QuickCheckApi;
use sslprobe::{SslCheckerClient, SslProbeError};

fn mock_body() -> String {
    serde_json::json!({
        "host": "example.com",
        "response_time_sec": "0.42",
        "status": "ok",
        "result": {
            "issued_to": "*.example.com",
            "issuer_o": "DigiCert Inc",
            "cert_valid": true,
            "cert_exp": false,
            "days_left": 90,
            "valid_from": "2024-01-30",
            "valid_till": "2025-03-01"
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_check_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/check/example.com")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_body())
        .create_async()
        .await;

    let client =
        SslCheckerClient::with_base_url(server.url(), Duration::from_secs(5)).unwrap();
    let report = client.check("example.com").await.unwrap();

    assert_eq!(report.host, "example.com");
    assert_eq!(report.status.as_deref(), Some("ok"));
    let result = report.result.unwrap();
    assert_eq!(result.days_left, Some(90));
    assert_eq!(result.cert_valid, Some(true));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_error_status_captures_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/check/nosuchhost.invalid")
        .with_status(500)
        .with_body("upstream resolver failure")
        .create_async()
        .await;

    let client =
        SslCheckerClient::with_base_url(server.url(), Duration::from_secs(5)).unwrap();
    let err = client.check("nosuchhost.invalid").await.unwrap_err();

    match err {
        SslProbeError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream resolver failure");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_check_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/check/example.com")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client =
        SslCheckerClient::with_base_url(server.url(), Duration::from_secs(5)).unwrap();
    let err = client.check("example.com").await.unwrap_err();
    assert!(matches!(err, SslProbeError::Decode(_)));
}
