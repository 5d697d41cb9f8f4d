//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::WorkflowError;
use crate::domain::report::ApprovalReport;
use ar_03_account::{Identity, RegistrationRequest};
use ar_04_kyc::{KycOutcome, KycRecord};
use async_trait::async_trait;
use shared_types::{IdentityId, LocationContext, Role};

/// The workflow surface administrative callers drive.
#[async_trait]
pub trait WorkflowApi: Send + Sync {
    /// Register an applicant, opening a KYC record when the requested
    /// role's route calls for one.
    async fn register(&self, request: RegistrationRequest) -> Result<Identity, WorkflowError>;

    /// Approve an identity into a role and fan out per the decision table.
    ///
    /// The account approval is the authoritative commit. Card issuance and
    /// notification failures land in `ApprovalReport::warnings`.
    async fn approve(
        &self,
        id: IdentityId,
        role: Role,
        location: &LocationContext,
    ) -> Result<ApprovalReport, WorkflowError>;

    /// Reject an identity.
    async fn reject(&self, id: IdentityId) -> Result<Identity, WorkflowError>;

    /// Record a KYC decision and mirror the outcome onto the account.
    async fn review_kyc(
        &self,
        id: IdentityId,
        outcome: KycOutcome,
        reason: Option<String>,
        reviewer: &str,
    ) -> Result<KycRecord, WorkflowError>;
}
