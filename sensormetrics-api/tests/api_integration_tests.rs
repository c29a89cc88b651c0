//! API integration tests for the sensor metrics service
//!
//! These tests drive the public HTTP API against the in-memory reading
//! store, exercising the full request/response cycle without any external
//! services.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use sensormetrics_api::{build_router, ApiConfig, AppState};
use sensormetrics_core::{MemoryReadingStore, StatisticResult, Timestamp};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app instance backed by an empty in-memory store
fn create_test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryReadingStore::new()),
        config: Arc::new(ApiConfig::default()),
    };
    build_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn ingest(app: &Router, sensor: &str, metric: &str, value: f64, timestamp: &Timestamp) {
    let request = post_json(
        "/api/metrics/ingest",
        json!({
            "sensorId": sensor,
            "metric": metric,
            "value": value,
            "timestamp": timestamp.to_rfc3339()
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let app = create_test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["service"], "sensormetrics-api");
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["readings_stored"], 0);
}

#[tokio::test]
async fn test_ingest_rejects_blank_sensor_id() {
    let app = create_test_app();

    let request = post_json(
        "/api/metrics/ingest",
        json!({
            "sensorId": "   ",
            "metric": "TEMPERATURE",
            "value": 20.5,
            "timestamp": "2024-01-01T00:00:00Z"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Bad request");
    assert_eq!(json["path"], "/api/metrics/ingest");
}

#[tokio::test]
async fn test_ingest_rejects_excess_precision() {
    let app = create_test_app();

    let request = post_json(
        "/api/metrics/ingest",
        json!({
            "sensorId": "S1",
            "metric": "TEMPERATURE",
            "value": 20.123456,
            "timestamp": "2024-01-01T00:00:00Z"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_avg_over_range() {
    let app = create_test_app();
    let now = Timestamp::now();

    ingest(&app, "S1", "TEMPERATURE", 20.0, &now.sub_millis(3_600_000).unwrap()).await;
    ingest(&app, "S1", "TEMPERATURE", 22.0, &now.sub_millis(1_800_000).unwrap()).await;
    ingest(&app, "S1", "TEMPERATURE", 24.0, &now.sub_millis(600_000).unwrap()).await;

    let request = post_json(
        "/api/metrics/query",
        json!({
            "sensorIds": ["S1"],
            "metrics": ["TEMPERATURE"],
            "statistic": "AVG",
            "from": now.sub_millis(24 * 60 * 60 * 1000).unwrap().to_rfc3339(),
            "to": now.to_rfc3339()
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let results: Vec<StatisticResult> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].sensor_id.as_str(), "S1");
    assert_eq!(results[0].value, dec!(22));
    assert_eq!(results[0].value.scale(), 4);
}

#[tokio::test]
async fn test_query_latest_mode_uses_most_recent_reading() {
    let app = create_test_app();
    let now = Timestamp::now();

    ingest(&app, "S3", "HUMIDITY", 40.0, &now.sub_millis(7_200_000).unwrap()).await;
    ingest(&app, "S3", "HUMIDITY", 55.0, &now.sub_millis(3_600_000).unwrap()).await;
    ingest(&app, "S3", "HUMIDITY", 60.0, &now).await;

    let request = post_json("/api/metrics/query", json!({ "statistic": "AVG" }));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let results: Vec<StatisticResult> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value, dec!(60));
    assert_eq!(results[0].from.timestamp_millis(), now.timestamp_millis());
    assert_eq!(results[0].to.timestamp_millis(), now.timestamp_millis());
}

#[tokio::test]
async fn test_query_with_only_from_is_rejected() {
    let app = create_test_app();

    let request = post_json(
        "/api/metrics/query",
        json!({
            "statistic": "MIN",
            "from": "2024-01-01T00:00:00Z"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Both 'from' and 'to' must be provided, or neither."
    );
}

#[tokio::test]
async fn test_query_with_forty_day_range_is_rejected() {
    let app = create_test_app();

    let request = post_json(
        "/api/metrics/query",
        json!({
            "statistic": "MAX",
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-02-10T00:00:00Z"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Date range must be between one day and one month."
    );
}

#[tokio::test]
async fn test_query_empty_store_returns_empty_list() {
    let app = create_test_app();

    let request = post_json("/api/metrics/query", json!({ "statistic": "SUM" }));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!([]));
}
