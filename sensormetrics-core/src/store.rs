//! Reading store abstraction
//!
//! The aggregation engine only needs a "fetch all" capability: it runs
//! against a full snapshot handed to it per query. This module defines the
//! store seam and an in-memory implementation backing the API service.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::MetricsResult;
use crate::reading::Reading;

/// Append-only store of sensor readings.
///
/// Implementations must hand out a consistent snapshot per `snapshot()`
/// call; there is no ordering guarantee between a concurrent `append` and
/// an in-flight snapshot. Readings are never mutated or deleted.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Store one reading verbatim
    async fn append(&self, reading: Reading) -> MetricsResult<()>;

    /// Fetch all stored readings as a consistent snapshot
    async fn snapshot(&self) -> MetricsResult<Vec<Reading>>;

    /// Number of stored readings
    async fn count(&self) -> MetricsResult<usize>;
}

/// In-memory reading store
#[derive(Debug, Default)]
pub struct MemoryReadingStore {
    readings: RwLock<Vec<Reading>>,
}

impl MemoryReadingStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn append(&self, reading: Reading) -> MetricsResult<()> {
        self.readings.write().await.push(reading);
        Ok(())
    }

    async fn snapshot(&self) -> MetricsResult<Vec<Reading>> {
        Ok(self.readings.read().await.clone())
    }

    async fn count(&self) -> MetricsResult<usize> {
        Ok(self.readings.read().await.len())
    }
}
