//! Error types for number series allocation.

use thiserror::Error;

/// All errors that can occur while reserving or administering series.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// No series is registered under the requested key
    #[error("Number series not found: {0}")]
    SeriesNotFound(String),

    /// The series exists but has been deactivated
    #[error("Number series is inactive: {0}")]
    SeriesInactive(String),

    /// A series with this key already exists
    #[error("Number series already exists: {0}")]
    DuplicateSeries(String),

    /// Series definition rejected before any write
    #[error("Invalid series definition: {0}")]
    InvalidSeries(String),

    /// Optimistic retry budget exhausted under extreme contention
    #[error("Series {series_key} contended beyond {attempts} reservation attempts")]
    Contention { series_key: String, attempts: u32 },

    /// Storage-layer fault, always surfaced
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Errors raised by a `SeriesStore` backend.
#[derive(Debug, Error)]
pub enum SeriesStoreError {
    #[error("Series key already present: {0}")]
    DuplicateKey(String),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl From<SeriesStoreError> for SequenceError {
    fn from(err: SeriesStoreError) -> Self {
        match err {
            SeriesStoreError::DuplicateKey(key) => Self::DuplicateSeries(key),
            SeriesStoreError::Backend(msg) => Self::Persistence(msg),
        }
    }
}
