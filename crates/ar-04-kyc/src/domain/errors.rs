//! Error types for KYC review.

use shared_types::{HolderId, KycStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KycError {
    /// No KYC record exists for this subject
    #[error("KYC record not found for subject {0}")]
    NotFound(HolderId),

    /// Rejections and refer-backs must carry a justification
    #[error("A reason is required for this KYC decision")]
    ReasonRequired,

    /// The requested transition is not part of the state machine
    #[error("KYC record for subject {subject} cannot move from {from}")]
    InvalidTransition { subject: HolderId, from: KycStatus },

    /// Storage-layer fault, always surfaced
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Errors raised by a `KycStore` backend.
#[derive(Debug, Error)]
pub enum KycStoreError {
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl From<KycStoreError> for KycError {
    fn from(err: KycStoreError) -> Self {
        match err {
            KycStoreError::Backend(msg) => Self::Persistence(msg),
        }
    }
}
