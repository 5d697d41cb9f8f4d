//! The `Identity` entity and its lifecycle states.

use serde::{Deserialize, Serialize};
use shared_types::{Contact, IdentityId, KycStatus, Role, Timestamp};

/// Lifecycle status of an applicant account.
///
/// `Pending → {Approved, Rejected}`, `Rejected → Approved` (re-approval
/// after an appeal is permitted). `Approved` is terminal with respect to
/// status; the role may still be reassigned administratively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Pending,
    Approved,
    Rejected,
}

/// An applicant account.
///
/// Invariant: `credential_digest` is `Some` exactly when `status` is
/// `Approved`. Registration never sets a credential; approval always does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    pub contact: Contact,
    /// Role the applicant asked for at registration. Advisory only.
    pub requested_role: Option<Role>,
    /// Role actually assigned, set at approval time.
    pub role: Option<Role>,
    pub status: AccountStatus,
    pub credential_digest: Option<String>,
    pub must_change_credential: bool,
    /// Mirror of the KYC sub-workflow state; only meaningful for roles
    /// that require KYC.
    pub kyc_status: Option<KycStatus>,
    pub registered_at: Timestamp,
}

impl Identity {
    /// Approval proceeds only from Pending or Rejected.
    pub fn can_be_approved(&self) -> bool {
        matches!(self.status, AccountStatus::Pending | AccountStatus::Rejected)
    }

    /// Rejection proceeds from any non-terminal status.
    pub fn can_be_rejected(&self) -> bool {
        self.status != AccountStatus::Approved
    }
}

/// Input to `register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub contact: Contact,
    pub requested_role: Option<Role>,
    /// Whether a KYC record should be opened for this applicant. Decided
    /// by the workflow's role table, not inside this subsystem.
    pub requires_kyc: bool,
}

impl RegistrationRequest {
    pub fn new(name: impl Into<String>, contact: Contact) -> Self {
        Self {
            name: name.into(),
            contact,
            requested_role: None,
            requires_kyc: false,
        }
    }

    pub fn with_requested_role(mut self, role: Role) -> Self {
        self.requested_role = Some(role);
        self
    }

    pub fn with_kyc(mut self) -> Self {
        self.requires_kyc = true;
        self
    }
}

/// Result of a successful approval. The plaintext one-time credential
/// appears here and nowhere else; it is handed to notification delivery
/// and then dropped.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    pub identity: Identity,
    pub one_time_credential: String,
}
