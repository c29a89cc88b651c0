//! HTTP handlers for the sensor metrics API

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Json,
};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use sensormetrics_core::{AggregationEngine, Reading, StatisticQuery, StatisticResult};
use sensormetrics_core::validation::Validator;

use crate::error::ApiError;
use crate::AppState;

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let stored = state
        .store
        .count()
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "sensormetrics-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "readings_stored": stored
    })))
}

/// Ingest a new sensor reading
pub async fn ingest_handler(
    State(state): State<AppState>,
    uri: Uri,
    Json(reading): Json<Reading>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    debug!(sensor = %reading.sensor_id, metric = %reading.metric, "Received reading");

    if let Err(err) = Validator::default().validate_reading(&reading) {
        warn!("Reading validation failed: {}", err);
        let (status, body) = ApiError::from_metrics_error(&err, uri.path());
        return Err((status, Json(body)));
    }

    state.store.append(reading).await.map_err(|err| {
        warn!("Failed to store reading: {}", err);
        let (status, body) = ApiError::from_metrics_error(&err, uri.path());
        (status, Json(body))
    })?;

    Ok(StatusCode::CREATED)
}

/// Compute statistics for the selected sensors and metrics
pub async fn query_handler(
    State(state): State<AppState>,
    uri: Uri,
    Json(query): Json<StatisticQuery>,
) -> Result<Json<Vec<StatisticResult>>, (StatusCode, Json<ApiError>)> {
    debug!("Received statistic query: {:?}", query);

    let snapshot = state.store.snapshot().await.map_err(|err| {
        warn!("Failed to load readings: {}", err);
        let (status, body) = ApiError::from_metrics_error(&err, uri.path());
        (status, Json(body))
    })?;

    match AggregationEngine::new().query(&snapshot, &query) {
        Ok(results) => {
            info!(
                groups = results.len(),
                statistic = %query.statistic,
                "Statistic query executed"
            );
            Ok(Json(results))
        }
        Err(err) => {
            warn!("Statistic query failed: {}", err);
            let (status, body) = ApiError::from_metrics_error(&err, uri.path());
            Err((status, Json(body)))
        }
    }
}
