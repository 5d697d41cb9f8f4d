//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::KycError;
use crate::domain::record::{KycOutcome, KycRecord};
use async_trait::async_trait;
use shared_types::HolderId;

/// Primary KYC review API.
#[async_trait]
pub trait KycReviewApi: Send + Sync {
    /// Open (or resubmit) the review record for a subject.
    ///
    /// A first submission creates a Pending record. Resubmission is legal
    /// only from `ReferredBack`; any other existing state is an
    /// `InvalidTransition`.
    async fn submit(&self, subject_id: HolderId) -> Result<KycRecord, KycError>;

    /// Record a reviewer's decision on a Pending record.
    ///
    /// `Rejected` and `ReferredBack` demand a non-empty reason
    /// (`ReasonRequired`). Deciding a record that is not Pending is an
    /// `InvalidTransition` and mutates nothing.
    async fn decide(
        &self,
        subject_id: HolderId,
        outcome: KycOutcome,
        reason: Option<String>,
        reviewer: &str,
    ) -> Result<KycRecord, KycError>;

    async fn get(&self, subject_id: HolderId) -> Result<KycRecord, KycError>;
}
