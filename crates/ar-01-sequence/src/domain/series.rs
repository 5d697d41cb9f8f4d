//! The `NumberSeries` entity: a named, prefixed monotonic counter.

use crate::domain::errors::SequenceError;
use serde::{Deserialize, Serialize};

/// A named counter from which sequence numbers are reserved.
///
/// `current_value` is the last value handed out. A freshly created series
/// therefore starts at `starting_value - 1` so the first reservation yields
/// `starting_value`. `version` supports optimistic concurrency in the store;
/// it is bumped on every successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSeries {
    pub series_key: String,
    /// String glued in front of rendered sequential codes, e.g. "FRM".
    pub prefix: String,
    pub starting_value: u64,
    /// Last reserved value; monotonically non-decreasing.
    pub current_value: u64,
    pub active: bool,
    pub version: u64,
}

impl NumberSeries {
    /// The value the next successful reservation will return.
    pub fn next_value(&self) -> u64 {
        self.current_value + 1
    }

    /// How many values have been reserved so far.
    pub fn reserved_count(&self) -> u64 {
        self.current_value + 1 - self.starting_value
    }
}

/// Definition used to create a new series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub series_key: String,
    pub prefix: String,
    pub starting_value: u64,
}

impl SeriesSpec {
    pub fn new(series_key: impl Into<String>, prefix: impl Into<String>, starting_value: u64) -> Self {
        Self {
            series_key: series_key.into(),
            prefix: prefix.into(),
            starting_value,
        }
    }

    /// Validate and materialize the series. Rejected definitions never reach
    /// the store.
    pub fn build(self) -> Result<NumberSeries, SequenceError> {
        if self.series_key.trim().is_empty() {
            return Err(SequenceError::InvalidSeries("series key is empty".into()));
        }
        if self.prefix.trim().is_empty() {
            return Err(SequenceError::InvalidSeries("prefix is empty".into()));
        }
        if self.starting_value == 0 {
            return Err(SequenceError::InvalidSeries(
                "starting value must be at least 1".into(),
            ));
        }
        Ok(NumberSeries {
            series_key: self.series_key,
            prefix: self.prefix,
            starting_value: self.starting_value,
            current_value: self.starting_value - 1,
            active: true,
            version: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fresh_series() {
        let series = SeriesSpec::new("FARMER", "FRM", 1).build().unwrap();
        assert_eq!(series.current_value, 0);
        assert_eq!(series.next_value(), 1);
        assert_eq!(series.reserved_count(), 0);
        assert!(series.active);
    }

    #[test]
    fn test_build_rejects_zero_start() {
        let err = SeriesSpec::new("FARMER", "FRM", 0).build().unwrap_err();
        assert!(matches!(err, SequenceError::InvalidSeries(_)));
    }

    #[test]
    fn test_build_rejects_blank_prefix() {
        let err = SeriesSpec::new("FARMER", "  ", 1).build().unwrap_err();
        assert!(matches!(err, SequenceError::InvalidSeries(_)));
    }

    #[test]
    fn test_reserved_count_tracks_allocations() {
        let mut series = SeriesSpec::new("EMPLOYEE", "EMP", 100).build().unwrap();
        assert_eq!(series.next_value(), 100);
        series.current_value = 104;
        assert_eq!(series.reserved_count(), 5);
    }
}
