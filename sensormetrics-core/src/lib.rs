//! # Sensor Metrics Core Library
//!
//! Shared library providing the data model, validation, and statistics
//! engine for the sensor metrics API service.
//!
//! ## Features
//!
//! - **Data Types**: Sensor readings, metric and statistic enumerations
//! - **Validation**: Ingest-side input checks and query range validation
//! - **Aggregation**: Filter/group pipeline and exact-decimal statistics
//! - **Storage**: Reading store abstraction with an in-memory implementation
//!
//! ## Architecture
//!
//! The aggregation engine is a pure function over an immutable snapshot of
//! stored readings: the store hands the engine a full snapshot per query,
//! the engine filters, groups by (sensor, metric), and reduces each group
//! to one statistic value. All value arithmetic uses exact decimals.

pub mod aggregation;
pub mod error;
pub mod query;
pub mod reading;
pub mod store;
pub mod time;
pub mod validation;

// Re-export commonly used types
pub use aggregation::AggregationEngine;
pub use error::{MetricsError, MetricsResult};
pub use query::{QueryRange, StatisticQuery, StatisticResult};
pub use reading::{MetricType, Reading, SensorId, StatisticType};
pub use store::{MemoryReadingStore, ReadingStore};
pub use time::Timestamp;

/// Version information for the sensor metrics services
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length for sensor identifiers
pub const MAX_SENSOR_ID_LENGTH: usize = 256;

/// Maximum number of integer digits in a reading value
pub const MAX_VALUE_INTEGER_DIGITS: u32 = 14;

/// Maximum number of fractional digits in a reading value
pub const MAX_VALUE_FRACTION_DIGITS: u32 = 4;

/// Output scale for all computed statistics
pub const STATISTIC_SCALE: u32 = 4;
