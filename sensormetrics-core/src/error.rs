//! Error types for sensor metrics operations

use thiserror::Error;

/// Result type for sensor metrics operations
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Error types for sensor metrics operations
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("{0}")]
    InvalidRange(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Time error: {0}")]
    Time(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetricsError {
    /// Create a new invalid range error
    pub fn invalid_range<S: Into<String>>(message: S) -> Self {
        Self::InvalidRange(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    /// Create a new time error
    pub fn time<S: Into<String>>(message: S) -> Self {
        Self::Time(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error was caused by the caller's input
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            MetricsError::InvalidRange(_) | MetricsError::Validation(_)
        )
    }

    /// Get the error category for logging and HTTP status mapping
    pub fn category(&self) -> &'static str {
        match self {
            MetricsError::InvalidRange(_) => "invalid_range",
            MetricsError::Validation(_) => "validation",
            MetricsError::Storage(_) => "storage",
            MetricsError::Time(_) => "time",
            MetricsError::Internal(_) => "internal",
            MetricsError::Io(_) => "io",
            MetricsError::Json(_) => "json",
        }
    }
}
