//! Time handling utilities for the sensor metrics services

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MetricsError, MetricsResult};

/// Number of milliseconds in one day
pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Timestamp representing a point in time (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl std::hash::Hash for Timestamp {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.timestamp_millis().hash(state);
    }
}

impl Timestamp {
    /// Get the current timestamp
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create from milliseconds since Unix epoch
    pub fn from_millis(millis: i64) -> MetricsResult<Self> {
        match Utc.timestamp_millis_opt(millis) {
            chrono::LocalResult::Single(dt) => Ok(Self(dt)),
            _ => Err(MetricsError::time(format!("Invalid timestamp: {}", millis))),
        }
    }

    /// Create from a DateTime<Utc>
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get milliseconds since Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Get the underlying DateTime<Utc>
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Format as ISO 8601 string
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Parse from ISO 8601 string
    pub fn from_rfc3339(s: &str) -> MetricsResult<Self> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| MetricsError::time(format!("Invalid RFC3339 timestamp: {}", e)))?
            .with_timezone(&Utc);
        Ok(Self(dt))
    }

    /// Add duration in milliseconds
    pub fn add_millis(&self, millis: i64) -> MetricsResult<Self> {
        let duration = chrono::Duration::milliseconds(millis);
        self.0
            .checked_add_signed(duration)
            .map(Self)
            .ok_or_else(|| MetricsError::time("Timestamp overflow".to_string()))
    }

    /// Subtract duration in milliseconds
    pub fn sub_millis(&self, millis: i64) -> MetricsResult<Self> {
        let duration = chrono::Duration::milliseconds(millis);
        self.0
            .checked_sub_signed(duration)
            .map(Self)
            .ok_or_else(|| MetricsError::time("Timestamp underflow".to_string()))
    }

    /// Milliseconds elapsed from this timestamp to another
    pub fn millis_until(&self, other: Timestamp) -> i64 {
        other.timestamp_millis() - self.timestamp_millis()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
