//! Query types and range validation

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};
use crate::reading::{MetricType, SensorId, StatisticType};
use crate::time::{Timestamp, ONE_DAY_MS};
use rust_decimal::Decimal;

/// Minimum allowed query window
pub const MIN_RANGE_MS: i64 = ONE_DAY_MS;

/// Maximum allowed query window (one month)
pub const MAX_RANGE_MS: i64 = 31 * ONE_DAY_MS;

/// Statistic query request.
///
/// Empty or absent `sensor_ids`/`metrics` lists mean "no filter". The
/// `from`/`to` bounds must be provided together or not at all; omitting
/// both selects latest mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticQuery {
    /// Sensors to include; empty means all
    #[serde(default)]
    pub sensor_ids: Option<Vec<SensorId>>,

    /// Metric types to include; empty means all
    #[serde(default)]
    pub metrics: Option<Vec<MetricType>>,

    /// Which statistic to compute
    pub statistic: StatisticType,

    /// Start of the query window (inclusive)
    #[serde(default)]
    pub from: Option<Timestamp>,

    /// End of the query window (inclusive)
    #[serde(default)]
    pub to: Option<Timestamp>,
}

impl StatisticQuery {
    /// Build a query with no filters for the given statistic
    pub fn for_statistic(statistic: StatisticType) -> Self {
        Self {
            sensor_ids: None,
            metrics: None,
            statistic,
            from: None,
            to: None,
        }
    }

    /// Validate and resolve the requested time window
    pub fn range(&self) -> MetricsResult<QueryRange> {
        QueryRange::resolve(self.from, self.to)
    }

    /// Check whether a sensor passes the sensor-id filter
    pub fn matches_sensor(&self, sensor_id: &SensorId) -> bool {
        match &self.sensor_ids {
            Some(ids) if !ids.is_empty() => ids.contains(sensor_id),
            _ => true,
        }
    }

    /// Check whether a metric passes the metric filter
    pub fn matches_metric(&self, metric: MetricType) -> bool {
        match &self.metrics {
            Some(metrics) if !metrics.is_empty() => metrics.contains(&metric),
            _ => true,
        }
    }
}

/// Validated query window.
///
/// `Latest` means no bounds were supplied and each group reduces to its
/// most recent reading(s). `Window` carries caller-supplied bounds that
/// already passed the duration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRange {
    Latest,
    Window { from: Timestamp, to: Timestamp },
}

impl QueryRange {
    /// Validate optional range bounds.
    ///
    /// Bounds must be supplied together, ordered `from < to`, and span
    /// between one day and one month. Validity depends only on the
    /// duration, never on calendar alignment.
    pub fn resolve(from: Option<Timestamp>, to: Option<Timestamp>) -> MetricsResult<Self> {
        let (from, to) = match (from, to) {
            (None, None) => return Ok(QueryRange::Latest),
            (Some(from), Some(to)) => (from, to),
            _ => {
                return Err(MetricsError::invalid_range(
                    "Both 'from' and 'to' must be provided, or neither.",
                ))
            }
        };

        if from >= to {
            return Err(MetricsError::invalid_range("'from' must be before 'to'."));
        }

        let duration_ms = from.millis_until(to);
        if !(MIN_RANGE_MS..=MAX_RANGE_MS).contains(&duration_ms) {
            return Err(MetricsError::invalid_range(
                "Date range must be between one day and one month.",
            ));
        }

        Ok(QueryRange::Window { from, to })
    }

    /// Check if a timestamp falls inside the window, inclusive both ends.
    /// Always true in latest mode, where no window filtering happens.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        match self {
            QueryRange::Latest => true,
            QueryRange::Window { from, to } => timestamp >= *from && timestamp <= *to,
        }
    }
}

/// Result of a statistic for one sensor and metric.
///
/// `from`/`to` report the effective window: the requested bounds in range
/// mode, or the group's latest timestamp (twice) in latest mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticResult {
    pub sensor_id: SensorId,
    pub metric: MetricType,
    pub statistic: StatisticType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
    pub from: Timestamp,
    pub to: Timestamp,
}
