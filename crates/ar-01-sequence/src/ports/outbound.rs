//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::SeriesStoreError;
use crate::domain::series::NumberSeries;
use async_trait::async_trait;

/// Persistence port for number series.
///
/// `update_if_version` is the serializing primitive the allocator's
/// compare-and-swap loop is built on: the write succeeds only when the
/// stored row still carries `expected_version`. Backends may implement it
/// with a versioned UPDATE, a row lock, or any equivalent mechanism, but a
/// plain read-then-write split does not satisfy this contract.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    async fn load(&self, series_key: &str) -> Result<Option<NumberSeries>, SeriesStoreError>;

    /// Insert a new series; fails with `DuplicateKey` if the key exists.
    async fn insert(&self, series: NumberSeries) -> Result<(), SeriesStoreError>;

    /// Conditionally persist `series` (with its already-bumped version)
    /// if the stored version still equals `expected_version`.
    /// Returns `false` when another writer got there first.
    async fn update_if_version(
        &self,
        series: NumberSeries,
        expected_version: u64,
    ) -> Result<bool, SeriesStoreError>;

    async fn list(&self) -> Result<Vec<NumberSeries>, SeriesStoreError>;
}
