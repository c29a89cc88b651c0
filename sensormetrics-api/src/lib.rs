//! Sensor Metrics API Service Library
//!
//! This library provides the components for the sensor metrics HTTP
//! service: configuration, request handlers, and error mapping.

pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use sensormetrics_core::store::ReadingStore;

pub use config::ApiConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReadingStore>,
    pub config: Arc<ApiConfig>,
}

/// Build the service router.
///
/// Shared between `main` and the integration tests so both exercise the
/// same routes and middleware stack.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.request.max_body_bytes;

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/metrics/ingest", post(handlers::ingest_handler))
        .route("/api/metrics/query", post(handlers::query_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}
