//! Integration tests for health endpoints.

use std::sync::Arc;

use axum::http::StatusCode;

use super::helpers::{DownStore, TestApp};

#[tokio::test]
async fn test_health_reports_ok_with_connected_store() {
    let app = TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "connected");
}

#[tokio::test]
async fn test_health_reports_degraded_when_store_is_down() {
    let app = TestApp::with_store(Arc::new(DownStore));

    let response = app.get("/api/health").await;

    // The endpoint itself stays up; only the store status degrades.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "degraded");
    assert_eq!(response.body["data"]["store"], "unavailable");
}
