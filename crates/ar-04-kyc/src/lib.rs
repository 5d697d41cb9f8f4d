//! # AR-04: KYC Review Subsystem
//!
//! The per-record review sub-state-machine attached to a subject profile
//! (typically a farmer). Independent of account approval, though the
//! workflow opens the record when a KYC-bearing role registers.
//!
//! Transitions: `Pending → {Approved, Rejected, ReferredBack}` and
//! `ReferredBack → Pending` on resubmission. Whether a rejected record may
//! be resubmitted directly is an open product decision and is deliberately
//! not implemented.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryKycStore;
pub use application::service::KycReviewService;
pub use domain::errors::{KycError, KycStoreError};
pub use domain::record::{KycOutcome, KycRecord};
pub use ports::inbound::KycReviewApi;
pub use ports::outbound::KycStore;
