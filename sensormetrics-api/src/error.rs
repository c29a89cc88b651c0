//! Error-to-JSON mapping for the HTTP surface

use axum::http::StatusCode;
use serde::Serialize;

use sensormetrics_core::{MetricsError, Timestamp};

/// Structure for error responses
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub timestamp: Timestamp,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ApiError {
    /// Build an error body for the given status and message
    pub fn new(status: StatusCode, error: &str, message: String, path: String) -> Self {
        Self {
            timestamp: Timestamp::now(),
            status: status.as_u16(),
            error: error.to_string(),
            message,
            path,
        }
    }

    /// Map a core error to its HTTP status and response body.
    ///
    /// Caller errors (invalid range, validation) become 400; everything
    /// else is an internal failure.
    pub fn from_metrics_error(err: &MetricsError, path: &str) -> (StatusCode, Self) {
        let status = if err.is_caller_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let error = match status {
            StatusCode::BAD_REQUEST => "Bad request",
            _ => "Internal error",
        };

        (
            status,
            Self::new(status, error, err.to_string(), path.to_string()),
        )
    }
}
