//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::SequenceError;
use async_trait::async_trait;

/// Primary sequence allocation API consumed by downstream subsystems.
#[async_trait]
pub trait SequenceAllocatorApi: Send + Sync {
    /// Atomically reserve the next value in the named series.
    ///
    /// Every successful call returns a value strictly greater than any value
    /// previously returned for the same series, with no gaps across the set
    /// of successful calls. A failed call reserves nothing.
    async fn reserve_next(&self, series_key: &str) -> Result<u64, SequenceError>;

    /// Read the value the next reservation would return, without reserving.
    ///
    /// For display purposes only. The returned value carries no claim: by
    /// the time a caller acts on it, another caller may already hold it.
    async fn peek_next(&self, series_key: &str) -> Result<u64, SequenceError>;
}
