//! In-memory series store.
//!
//! The mutex makes each store call a single atomic unit, so the CAS
//! contract holds trivially. Production deployments back this port with a
//! database row carrying a version column.

use crate::domain::errors::SeriesStoreError;
use crate::domain::series::NumberSeries;
use crate::ports::outbound::SeriesStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemorySeriesStore {
    rows: Mutex<HashMap<String, NumberSeries>>,
}

impl InMemorySeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, NumberSeries>>, SeriesStoreError> {
        self.rows
            .lock()
            .map_err(|_| SeriesStoreError::Backend("series store mutex poisoned".into()))
    }
}

#[async_trait]
impl SeriesStore for InMemorySeriesStore {
    async fn load(&self, series_key: &str) -> Result<Option<NumberSeries>, SeriesStoreError> {
        Ok(self.lock()?.get(series_key).cloned())
    }

    async fn insert(&self, series: NumberSeries) -> Result<(), SeriesStoreError> {
        let mut rows = self.lock()?;
        if rows.contains_key(&series.series_key) {
            return Err(SeriesStoreError::DuplicateKey(series.series_key));
        }
        rows.insert(series.series_key.clone(), series);
        Ok(())
    }

    async fn update_if_version(
        &self,
        series: NumberSeries,
        expected_version: u64,
    ) -> Result<bool, SeriesStoreError> {
        let mut rows = self.lock()?;
        match rows.get(&series.series_key) {
            Some(stored) if stored.version == expected_version => {
                rows.insert(series.series_key.clone(), series);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<NumberSeries>, SeriesStoreError> {
        Ok(self.lock()?.values().cloned().collect())
    }
}
