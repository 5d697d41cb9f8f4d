//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::AccountError;
use crate::domain::identity::{ApprovalOutcome, Identity, RegistrationRequest};
use async_trait::async_trait;
use shared_types::{IdentityId, KycStatus, Role};

/// Primary account lifecycle API.
#[async_trait]
pub trait AccountLifecycleApi: Send + Sync {
    /// Register a new applicant.
    ///
    /// Fails with `DuplicateContact` when the email or phone is taken and
    /// with `VerificationNotCompleted` when the contact was never verified.
    /// On success the identity is Pending with no credential, the
    /// verification record is consumed, and a best-effort welcome
    /// notification goes out.
    async fn register(&self, request: RegistrationRequest) -> Result<Identity, AccountError>;

    /// Approve an identity and assign its role.
    ///
    /// Allowed from Pending and Rejected only. Assigns the role, mints a
    /// one-time credential (stored as a digest, returned in plaintext once),
    /// and marks the account as requiring a credential change on first use.
    /// Delivery of the credential is the coordinator's concern; see
    /// `notify_approval`.
    async fn approve(&self, id: IdentityId, role: Role) -> Result<ApprovalOutcome, AccountError>;

    /// Deliver the approval notification carrying the one-time credential.
    ///
    /// Best-effort: a delivery failure is returned as a warning string,
    /// never as an error, and the approval itself is untouched.
    async fn notify_approval(&self, outcome: &ApprovalOutcome) -> Option<String>;

    /// Deliver the card-ready notification for a freshly issued card.
    /// Same best-effort contract as `notify_approval`.
    async fn notify_card_issued(&self, identity: &Identity, card_id: &str) -> Option<String>;

    /// Reject an identity. Allowed from any non-terminal status; emits a
    /// best-effort rejection notification.
    async fn reject(&self, id: IdentityId) -> Result<Identity, AccountError>;

    /// Replace the credential and clear the must-change flag. Emits a
    /// best-effort confirmation notification.
    async fn change_credential(
        &self,
        id: IdentityId,
        new_credential: &str,
    ) -> Result<Identity, AccountError>;

    /// Mirror the KYC sub-workflow outcome onto the account record.
    async fn update_kyc_status(
        &self,
        id: IdentityId,
        status: KycStatus,
    ) -> Result<Identity, AccountError>;

    /// Fetch a single identity.
    async fn get(&self, id: IdentityId) -> Result<Identity, AccountError>;
}
