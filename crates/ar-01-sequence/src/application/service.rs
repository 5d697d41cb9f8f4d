//! Sequence Allocator Service
//!
//! Implements `SequenceAllocatorApi` with an optimistic compare-and-swap
//! loop against the `SeriesStore` port. The read and the increment are one
//! unit: either this caller's conditional write lands and the value is
//! theirs alone, or the loop retries against the fresh row.

use crate::config::AllocatorConfig;
use crate::domain::errors::SequenceError;
use crate::domain::series::{NumberSeries, SeriesSpec};
use crate::ports::inbound::SequenceAllocatorApi;
use crate::ports::outbound::SeriesStore;
use ar_02_identifier::sequential_code;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct SequenceAllocatorService<S: SeriesStore> {
    store: Arc<S>,
    config: AllocatorConfig,
}

impl<S: SeriesStore> SequenceAllocatorService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            config: AllocatorConfig::default(),
        }
    }

    pub fn with_config(store: Arc<S>, config: AllocatorConfig) -> Self {
        Self { store, config }
    }

    /// Register a new series. Fails with `DuplicateSeries` if the key is
    /// already taken; the definition is validated before any write.
    pub async fn create_series(&self, spec: SeriesSpec) -> Result<NumberSeries, SequenceError> {
        let series = spec.build()?;
        self.store.insert(series.clone()).await?;
        info!(
            series_key = %series.series_key,
            prefix = %series.prefix,
            starting_value = series.starting_value,
            "Number series created"
        );
        Ok(series)
    }

    /// Activate or deactivate a series. Deactivation does not disturb
    /// `current_value`; reservations simply start failing with
    /// `SeriesInactive` until the series is switched back on.
    pub async fn set_active(&self, series_key: &str, active: bool) -> Result<(), SequenceError> {
        for _ in 0..self.config.max_reserve_attempts {
            let series = self.load_required(series_key).await?;
            let expected = series.version;
            let mut updated = series;
            updated.active = active;
            updated.version += 1;
            if self.store.update_if_version(updated, expected).await? {
                info!(series_key, active, "Number series activation changed");
                return Ok(());
            }
        }
        Err(SequenceError::Contention {
            series_key: series_key.into(),
            attempts: self.config.max_reserve_attempts,
        })
    }

    pub async fn get_series(&self, series_key: &str) -> Result<NumberSeries, SequenceError> {
        self.load_required(series_key).await
    }

    /// Render the next business code for display, e.g. `FRM-00042`.
    /// Reserves nothing; the counter moves only when `reserve_next` commits.
    pub async fn preview_code(&self, series_key: &str) -> Result<String, SequenceError> {
        let series = self.load_required(series_key).await?;
        if !series.active {
            return Err(SequenceError::SeriesInactive(series_key.into()));
        }
        Ok(sequential_code(&series.prefix, series.next_value()))
    }

    pub async fn list_series(&self) -> Result<Vec<NumberSeries>, SequenceError> {
        Ok(self.store.list().await?)
    }

    async fn load_required(&self, series_key: &str) -> Result<NumberSeries, SequenceError> {
        self.store
            .load(series_key)
            .await?
            .ok_or_else(|| SequenceError::SeriesNotFound(series_key.into()))
    }
}

#[async_trait]
impl<S: SeriesStore> SequenceAllocatorApi for SequenceAllocatorService<S> {
    async fn reserve_next(&self, series_key: &str) -> Result<u64, SequenceError> {
        for attempt in 0..self.config.max_reserve_attempts {
            let series = self.load_required(series_key).await?;
            if !series.active {
                return Err(SequenceError::SeriesInactive(series_key.into()));
            }

            let reserved = series.next_value();
            let expected = series.version;
            let mut updated = series;
            updated.current_value = reserved;
            updated.version += 1;

            if self.store.update_if_version(updated, expected).await? {
                debug!(series_key, reserved, "Sequence number reserved");
                return Ok(reserved);
            }

            debug!(series_key, attempt, "Reservation lost the race, retrying");
        }

        warn!(
            series_key,
            attempts = self.config.max_reserve_attempts,
            "Sequence reservation retry budget exhausted"
        );
        Err(SequenceError::Contention {
            series_key: series_key.into(),
            attempts: self.config.max_reserve_attempts,
        })
    }

    async fn peek_next(&self, series_key: &str) -> Result<u64, SequenceError> {
        let series = self.load_required(series_key).await?;
        if !series.active {
            return Err(SequenceError::SeriesInactive(series_key.into()));
        }
        Ok(series.next_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySeriesStore;
    use crate::ports::outbound::mocks::FailingSeriesStore;
    use std::collections::HashSet;

    async fn service_with_series(key: &str, start: u64) -> SequenceAllocatorService<InMemorySeriesStore> {
        let service = SequenceAllocatorService::new(Arc::new(InMemorySeriesStore::new()));
        service
            .create_series(SeriesSpec::new(key, "FRM", start))
            .await
            .unwrap();
        service
    }

    #[tokio::test]
    async fn test_reserve_starts_at_starting_value() {
        let service = service_with_series("FARMER", 1).await;

        assert_eq!(service.reserve_next("FARMER").await.unwrap(), 1);
        assert_eq!(service.reserve_next("FARMER").await.unwrap(), 2);
        assert_eq!(service.reserve_next("FARMER").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_reserve_unknown_series() {
        let service = SequenceAllocatorService::new(Arc::new(InMemorySeriesStore::new()));

        let err = service.reserve_next("NOPE").await.unwrap_err();
        assert!(matches!(err, SequenceError::SeriesNotFound(_)));
    }

    #[tokio::test]
    async fn test_reserve_inactive_series() {
        let service = service_with_series("FARMER", 1).await;
        service.set_active("FARMER", false).await.unwrap();

        let err = service.reserve_next("FARMER").await.unwrap_err();
        assert!(matches!(err, SequenceError::SeriesInactive(_)));

        // Reactivation resumes where the counter left off.
        service.set_active("FARMER", true).await.unwrap();
        assert_eq!(service.reserve_next("FARMER").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_peek_does_not_reserve() {
        let service = service_with_series("FARMER", 10).await;

        assert_eq!(service.peek_next("FARMER").await.unwrap(), 10);
        assert_eq!(service.peek_next("FARMER").await.unwrap(), 10);
        assert_eq!(service.reserve_next("FARMER").await.unwrap(), 10);
        assert_eq!(service.peek_next("FARMER").await.unwrap(), 11);
    }

    #[tokio::test]
    async fn test_duplicate_series_rejected() {
        let service = service_with_series("FARMER", 1).await;

        let err = service
            .create_series(SeriesSpec::new("FARMER", "FRM", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, SequenceError::DuplicateSeries(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_reservations_distinct_and_contiguous() {
        // Retry budget above the task count, so contention alone cannot
        // exhaust it.
        let service = SequenceAllocatorService::with_config(
            Arc::new(InMemorySeriesStore::new()),
            AllocatorConfig {
                max_reserve_attempts: 128,
            },
        );
        service
            .create_series(SeriesSpec::new("FARMER", "FRM", 1))
            .await
            .unwrap();
        let service = Arc::new(service);
        let tasks = 50;

        let mut handles = Vec::new();
        for _ in 0..tasks {
            let svc = Arc::clone(&service);
            handles.push(tokio::spawn(
                async move { svc.reserve_next("FARMER").await },
            ));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            let value = handle.await.unwrap().unwrap();
            assert!(seen.insert(value), "duplicate sequence value {value}");
        }

        // Pairwise distinct and contiguous from the starting value.
        assert_eq!(seen.len(), tasks);
        assert_eq!(*seen.iter().min().unwrap(), 1);
        assert_eq!(*seen.iter().max().unwrap(), tasks as u64);

        let series = service.get_series("FARMER").await.unwrap();
        assert_eq!(series.current_value, tasks as u64);
    }

    #[tokio::test]
    async fn test_preview_code_renders_without_reserving() {
        let store = Arc::new(InMemorySeriesStore::new());
        let service = SequenceAllocatorService::new(store);
        service
            .create_series(SeriesSpec::new("FARMER", "FRM", 42))
            .await
            .unwrap();

        assert_eq!(service.preview_code("FARMER").await.unwrap(), "FRM-00042");
        assert_eq!(service.preview_code("FARMER").await.unwrap(), "FRM-00042");

        service.reserve_next("FARMER").await.unwrap();
        assert_eq!(service.preview_code("FARMER").await.unwrap(), "FRM-00043");
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_persistence_and_keeps_counter() {
        let store = Arc::new(FailingSeriesStore::new());
        let service = SequenceAllocatorService::new(Arc::clone(&store));
        service
            .create_series(SeriesSpec::new("FARMER", "FRM", 5))
            .await
            .unwrap();

        store.set_failing(true);
        let err = service.reserve_next("FARMER").await.unwrap_err();
        assert!(matches!(err, SequenceError::Persistence(_)));

        // The failed attempt did not advance the counter.
        store.set_failing(false);
        assert_eq!(service.reserve_next("FARMER").await.unwrap(), 5);
    }
}
