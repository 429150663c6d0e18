//! Integration tests for the chart relay through the composed router.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use equity_api::middleware::cors_layer;
use equity_api::routes::create_api_router;
use equity_api::state::AppState;
use equity_api::ErrorDetail;
use equity_upstream::ChartClient;

/// Build the full application router the way the server binary does.
fn build_app(upstream_url: &str) -> Router {
    let state = Arc::new(AppState::new(ChartClient::with_base_url(upstream_url)));
    create_api_router().with_state(state).layer(cors_layer())
}

/// Upstream 200 with body B => client receives 200 with body exactly B.
#[tokio::test]
async fn test_relay_returns_upstream_body_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"chart":{"result":[{"meta":{"symbol":"AAPL","currency":"USD"},"timestamp":[1700000000],"indicators":{"quote":[{"close":[189.71]}]}}],"error":null}}"#;
    let mock = server
        .mock("GET", "/v8/finance/chart/AAPL")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let app = build_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stock/AAPL")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap()),
        Some("application/json")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], body.as_bytes());

    mock.assert_async().await;
}

/// Upstream 404 => client receives 404 with the fixed error detail.
#[tokio::test]
async fn test_relay_translates_upstream_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/ZZZZ")
        .with_status(404)
        .with_body(r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#)
        .create_async()
        .await;

    let app = build_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stock/ZZZZ")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorDetail = serde_json::from_slice(&bytes).unwrap();

    // The upstream error description must not leak through
    assert_eq!(error.detail, "Error fetching stock data");
}

/// Unreachable upstream => client receives 500 with the failure description.
#[tokio::test]
async fn test_relay_translates_transport_failure() {
    let app = build_app("http://127.0.0.1:9");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stock/AAPL")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorDetail = serde_json::from_slice(&bytes).unwrap();
    assert!(!error.detail.is_empty());
}

/// Allowed origins get credentialed CORS headers on the relay response.
#[tokio::test]
async fn test_relay_response_carries_cors_headers_for_allowed_origin() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/AAPL")
        .with_status(200)
        .with_body(r#"{"chart":{"result":[],"error":null}}"#)
        .create_async()
        .await;

    let app = build_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stock/AAPL")
                .header(header::ORIGIN, "https://equitycats.netlify.app")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("https://equitycats.netlify.app")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .map(|v| v.to_str().unwrap()),
        Some("true")
    );
}

/// Non-listed origins get no permissive CORS headers.
#[tokio::test]
async fn test_relay_response_has_no_cors_headers_for_unlisted_origin() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/AAPL")
        .with_status(200)
        .with_body(r#"{"chart":{"result":[],"error":null}}"#)
        .create_async()
        .await;

    let app = build_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stock/AAPL")
                .header(header::ORIGIN, "https://not-on-the-list.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

/// Health endpoints stay reachable alongside the relay route.
#[tokio::test]
async fn test_health_endpoints_reachable() {
    let app = build_app("http://127.0.0.1:9");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
