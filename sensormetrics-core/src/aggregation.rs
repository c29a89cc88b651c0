//! Aggregation engine: filter, group, and reduce sensor readings

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use tracing::debug;

use crate::error::MetricsResult;
use crate::query::{QueryRange, StatisticQuery, StatisticResult};
use crate::reading::{MetricType, Reading, SensorId, StatisticType};
use crate::time::Timestamp;
use crate::STATISTIC_SCALE;

/// Aggregation engine that reduces a snapshot of stored readings to one
/// statistic per (sensor, metric) group.
///
/// The engine is a pure, synchronous computation: it takes an immutable
/// snapshot plus query filters and returns results, performing no I/O and
/// holding no state. Any number of queries may run concurrently.
#[derive(Debug, Default)]
pub struct AggregationEngine;

impl AggregationEngine {
    /// Create a new aggregation engine
    pub fn new() -> Self {
        Self
    }

    /// Execute a statistic query against a full snapshot of readings.
    ///
    /// Range validation runs first and aborts the whole query on failure;
    /// partial results are never returned. Groups with no surviving
    /// readings are omitted from the result entirely, so an empty filtered
    /// set yields an empty list.
    pub fn query(
        &self,
        snapshot: &[Reading],
        query: &StatisticQuery,
    ) -> MetricsResult<Vec<StatisticResult>> {
        let range = query.range()?;

        let filtered: Vec<&Reading> = snapshot
            .iter()
            .filter(|r| query.matches_sensor(&r.sensor_id))
            .filter(|r| query.matches_metric(r.metric))
            .filter(|r| range.contains(r.timestamp))
            .collect();

        debug!(
            total = snapshot.len(),
            filtered = filtered.len(),
            statistic = %query.statistic,
            "Filtered snapshot for statistic query"
        );

        if filtered.is_empty() {
            return Ok(Vec::new());
        }

        let grouped = Self::group_by_sensor_and_metric(filtered);

        let mut results = Vec::with_capacity(grouped.len());
        for ((sensor_id, metric), members) in grouped {
            let (effective, from, to) = match range {
                QueryRange::Window { from, to } => (members, from, to),
                QueryRange::Latest => match Self::latest_readings(members) {
                    Some((latest_members, latest)) => (latest_members, latest, latest),
                    // Groups are non-empty by construction; skip defensively
                    None => continue,
                },
            };

            let value = compute_statistic(&effective, query.statistic);

            results.push(StatisticResult {
                sensor_id,
                metric,
                statistic: query.statistic,
                value,
                from,
                to,
            });
        }

        Ok(results)
    }

    /// Partition readings by the (sensor, metric) pair
    fn group_by_sensor_and_metric(
        readings: Vec<&Reading>,
    ) -> HashMap<(SensorId, MetricType), Vec<&Reading>> {
        let mut groups: HashMap<(SensorId, MetricType), Vec<&Reading>> = HashMap::new();

        for reading in readings {
            groups
                .entry((reading.sensor_id.clone(), reading.metric))
                .or_default()
                .push(reading);
        }

        groups
    }

    /// Keep only the readings sharing the group's maximum timestamp.
    ///
    /// Ties are all kept: if several readings carry the identical latest
    /// timestamp, each of them contributes to the statistic. Returns `None`
    /// for an empty group, which the pipeline never produces.
    fn latest_readings(members: Vec<&Reading>) -> Option<(Vec<&Reading>, Timestamp)> {
        let latest = members.iter().map(|r| r.timestamp).max()?;

        let latest_members = members
            .into_iter()
            .filter(|r| r.timestamp == latest)
            .collect();

        Some((latest_members, latest))
    }
}

/// Compute one statistic over a group of readings.
///
/// All arithmetic stays in exact decimals; the result is rescaled to four
/// fractional digits with half-up rounding. The zero fallbacks are
/// unreachable through the engine (groups are never empty) but keep the
/// function total.
pub fn compute_statistic(readings: &[&Reading], statistic: StatisticType) -> Decimal {
    match statistic {
        StatisticType::Min => to_statistic_scale(
            readings
                .iter()
                .map(|r| r.value)
                .min()
                .unwrap_or(Decimal::ZERO),
        ),
        StatisticType::Max => to_statistic_scale(
            readings
                .iter()
                .map(|r| r.value)
                .max()
                .unwrap_or(Decimal::ZERO),
        ),
        StatisticType::Sum => {
            to_statistic_scale(readings.iter().map(|r| r.value).sum::<Decimal>())
        }
        StatisticType::Avg => {
            if readings.is_empty() {
                return to_statistic_scale(Decimal::ZERO);
            }
            let sum: Decimal = readings.iter().map(|r| r.value).sum();
            to_statistic_scale(sum / Decimal::from(readings.len()))
        }
    }
}

/// Rescale a decimal to the fixed output scale, rounding half-up
fn to_statistic_scale(value: Decimal) -> Decimal {
    let mut scaled =
        value.round_dp_with_strategy(STATISTIC_SCALE, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(STATISTIC_SCALE);
    scaled
}
