//! Error types for the account lifecycle.

use shared_types::IdentityId;
use thiserror::Error;

use super::identity::AccountStatus;

/// All errors that can occur in account lifecycle operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// No identity registered under this id
    #[error("Identity not found: {0}")]
    NotFound(IdentityId),

    /// Email or phone already belongs to another identity
    #[error("Contact already registered: {0}")]
    DuplicateContact(String),

    /// The contact has no completed verification record
    #[error("Contact verification not completed: {0}")]
    VerificationNotCompleted(String),

    /// Approval only proceeds from Pending or Rejected
    #[error("Identity {id} cannot be approved from status {current:?}")]
    InvalidStateForApproval {
        id: IdentityId,
        current: AccountStatus,
    },

    /// Rejection only proceeds from a non-terminal status
    #[error("Identity {id} cannot be rejected from status {current:?}")]
    InvalidStateForRejection {
        id: IdentityId,
        current: AccountStatus,
    },

    /// New credential rejected before any write
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Credential change requires an approved account with an issued credential
    #[error("Identity {0} has no issued credential to change")]
    NoCredentialIssued(IdentityId),

    /// Storage-layer fault, always surfaced
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Errors raised by an `IdentityStore` backend.
#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("Email already present: {0}")]
    DuplicateEmail(String),

    #[error("Phone already present: {0}")]
    DuplicatePhone(String),

    #[error("No such identity: {0}")]
    Missing(IdentityId),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl From<IdentityStoreError> for AccountError {
    fn from(err: IdentityStoreError) -> Self {
        match err {
            IdentityStoreError::DuplicateEmail(v) | IdentityStoreError::DuplicatePhone(v) => {
                Self::DuplicateContact(v)
            }
            IdentityStoreError::Missing(id) => Self::NotFound(id),
            IdentityStoreError::Backend(msg) => Self::Persistence(msg),
        }
    }
}

/// Notification delivery failure. Callers log these and attach them as
/// warnings; they never fail a lifecycle transition.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}
