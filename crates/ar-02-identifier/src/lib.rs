//! # AR-02: Identifier Formatting Subsystem
//!
//! Renders reserved sequence numbers into canonical identifier strings.
//! Both renderings are total functions of their inputs; uniqueness is
//! guaranteed entirely by the sequence allocator, never by this crate.
//!
//! ## Architecture
//!
//! - **Domain**: `sequential_code` / `composite_code` pure formatters
//! - **Ports**: Outbound (`LocationCodeLookup`)
//! - **Adapters**: `StaticLocationTable`

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::static_table::StaticLocationTable;
pub use domain::format::{composite_code, sequential_code};
pub use ports::outbound::LocationCodeLookup;
