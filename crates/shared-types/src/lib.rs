//! # Shared Types Crate
//!
//! Cross-subsystem domain types for the identity issuance and approval
//! workflow. Every subsystem crate depends on this one and nothing else
//! at the type level.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: entity kinds, roles, and contact types are
//!   defined here once and reused by every subsystem.
//! - **No behavior**: this crate carries data and trivially-pure helpers
//!   only; state machines live in their owning subsystem crates.

pub mod entities;
pub mod time;

pub use entities::*;
pub use time::{SystemTimeSource, TimeSource, Timestamp};
