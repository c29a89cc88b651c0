//! Sensor reading types and the metric/statistic enumerations

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MetricsError, MetricsResult};
use crate::time::Timestamp;

/// Sensor identifier - a non-empty string naming the reporting sensor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorId(String);

impl SensorId {
    /// Create a new sensor identifier
    pub fn new<S: Into<String>>(id: S) -> MetricsResult<Self> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(MetricsError::validation("Sensor id cannot be blank"));
        }

        if id.len() > crate::MAX_SENSOR_ID_LENGTH {
            return Err(MetricsError::validation(format!(
                "Sensor id too long: {} > {}",
                id.len(),
                crate::MAX_SENSOR_ID_LENGTH
            )));
        }

        Ok(Self(id))
    }

    /// Create without validation (for internal use)
    pub(crate) fn new_unchecked<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier is blank
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SensorId {
    fn from(s: &str) -> Self {
        Self::new_unchecked(s)
    }
}

impl From<String> for SensorId {
    fn from(s: String) -> Self {
        Self::new_unchecked(s)
    }
}

impl AsRef<str> for SensorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SensorId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SensorId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Types of metrics a sensor can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    Temperature,
    Humidity,
    WindSpeed,
}

impl MetricType {
    /// Get the wire-format name
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Temperature => "TEMPERATURE",
            MetricType::Humidity => "HUMIDITY",
            MetricType::WindSpeed => "WIND_SPEED",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported statistics over a group of readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatisticType {
    Min,
    Max,
    Sum,
    Avg,
}

impl StatisticType {
    /// Get the wire-format name
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticType::Min => "MIN",
            StatisticType::Max => "MAX",
            StatisticType::Sum => "SUM",
            StatisticType::Avg => "AVG",
        }
    }
}

impl fmt::Display for StatisticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One stored sensor reading.
///
/// Readings are immutable: created once at ingestion, never mutated or
/// deleted. The timestamp is supplied by the caller, not assigned by the
/// server, and the value keeps the exact decimal precision it was
/// submitted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Identifier of the reporting sensor
    pub sensor_id: SensorId,

    /// Which metric this reading measures
    pub metric: MetricType,

    /// The measured value, exact decimal
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,

    /// When the measurement was taken (UTC)
    pub timestamp: Timestamp,
}

impl Reading {
    /// Create a new reading
    pub fn new(
        sensor_id: SensorId,
        metric: MetricType,
        value: Decimal,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            sensor_id,
            metric,
            value,
            timestamp,
        }
    }
}
