//! # AR-01: Number Series Subsystem
//!
//! Named, prefixed monotonic counters used to mint sequence numbers for
//! entity codes and credential artifact identifiers.
//!
//! The one hard guarantee of this subsystem: `reserve_next` is an atomic
//! read-and-increment. Under any number of concurrent callers the returned
//! values are pairwise distinct and contiguous, with no value ever recycled.
//! Read-only previews (`peek_next`, `preview_code`) exist for display
//! screens and reserve nothing.
//!
//! ## Architecture
//!
//! - **Domain**: `NumberSeries` entity and series validation
//! - **Ports**: Inbound (`SequenceAllocatorApi`) and Outbound (`SeriesStore`)
//! - **Application**: `SequenceAllocatorService` (compare-and-swap loop)
//! - **Adapters**: `InMemorySeriesStore`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemorySeriesStore;
pub use application::service::SequenceAllocatorService;
pub use config::AllocatorConfig;
pub use domain::errors::{SequenceError, SeriesStoreError};
pub use domain::series::{NumberSeries, SeriesSpec};
pub use ports::inbound::SequenceAllocatorApi;
pub use ports::outbound::SeriesStore;
