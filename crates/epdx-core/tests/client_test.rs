//! Transfer-client tests against a mock HTTP server.
//!
//! Covers the upload and health-check boundary: success mapping, non-2xx
//! mapping, network failure, and the rule that validation rejects a file
//! before any request is issued.

use epdx_core::{EpdError, ExtractionClient, Session};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn extract_posts_multipart_pdf_and_returns_raw_json() {
    let server = MockServer::start().await;
    let body = json!({
        "data": { "product_name": "Beam" },
        "carbonFootprintPerKg": { "value": 5 }
    });

    Mock::given(method("POST"))
        .and(path("/api/extract-epd"))
        .and(header("accept", "application/json"))
        .and(body_string_contains("name=\"pdf\""))
        .and(body_string_contains("%PDF-1.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let raw = client
        .extract("report.pdf", b"%PDF-1.7 minimal".to_vec())
        .await
        .unwrap();
    assert_eq!(raw, body);
}

#[tokio::test]
async fn extract_maps_non_2xx_to_api_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract-epd"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let err = client
        .extract("report.pdf", b"%PDF-1.7 minimal".to_vec())
        .await
        .unwrap_err();
    match err {
        EpdError::Api {
            status,
            status_text,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn health_check_reports_ok_with_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "2.0.0" })))
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let status = client.health_check().await;
    assert!(status.ok);
    assert_eq!(status.version.as_deref(), Some("2.0.0"));
}

#[tokio::test]
async fn health_check_tolerates_missing_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let status = client.health_check().await;
    assert!(status.ok);
    assert_eq!(status.version, None);
}

#[tokio::test]
async fn health_check_non_2xx_is_unhealthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let status = client.health_check().await;
    assert!(!status.ok);
    assert_eq!(status.version, None);
}

#[tokio::test]
async fn health_check_network_failure_is_unhealthy() {
    // Nothing listens on this port.
    let client = ExtractionClient::new("http://127.0.0.1:9").unwrap();
    let status = client.health_check().await;
    assert!(!status.ok);
    assert_eq!(status.version, None);
}

#[tokio::test]
async fn session_rejects_png_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extract-epd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let mut session = Session::new(client);
    let err = session
        .select_bytes("image.png".into(), b"\x89PNG\r\n\x1a\n".to_vec())
        .unwrap_err();
    assert!(matches!(err, EpdError::NotAPdf));

    // No file staged, so extraction refuses locally as well.
    let err = session.extract().await.unwrap_err();
    assert!(matches!(err, EpdError::NoFileSelected));

    server.verify().await;
}

#[tokio::test]
async fn session_stores_raw_response_for_export() {
    let server = MockServer::start().await;
    let body = json!({
        "data": { "product_name": "Beam", "gwp": { "value": 10, "unit": "kg CO2e" } },
        "carbonFootprintPerKg": { "value": 5 }
    });
    Mock::given(method("POST"))
        .and(path("/api/extract-epd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ExtractionClient::new(server.uri()).unwrap();
    let mut session = Session::new(client);
    session
        .select_bytes("report.pdf".into(), b"%PDF-1.7 minimal".to_vec())
        .unwrap();
    session.extract().await.unwrap();

    assert_eq!(session.current_data(), Some(&body));

    let json_export = session.export_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_export).unwrap();
    assert_eq!(parsed, body);

    let csv_export = session.export_csv().unwrap();
    assert!(csv_export.starts_with("Field,Value,Unit,Source"));
    assert!(csv_export.contains("Global Warming Potential,10,kg CO2e,"));
}
