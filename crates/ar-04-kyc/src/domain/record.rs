//! The `KycRecord` entity and review outcomes.

use serde::{Deserialize, Serialize};
use shared_types::{HolderId, KycStatus, Timestamp};

/// Decision a reviewer can take on a Pending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycOutcome {
    Approved,
    Rejected,
    ReferredBack,
}

impl KycOutcome {
    /// Rejections and refer-backs require a justification.
    pub fn requires_reason(&self) -> bool {
        matches!(self, Self::Rejected | Self::ReferredBack)
    }

    pub fn status(&self) -> KycStatus {
        match self {
            Self::Approved => KycStatus::Approved,
            Self::Rejected => KycStatus::Rejected,
            Self::ReferredBack => KycStatus::ReferredBack,
        }
    }
}

/// The review record attached 1:1 to a subject profile.
///
/// Invariant: `rejection_reason` is `Some` exactly when status is
/// `Rejected`, and `refer_back_reason` exactly when `ReferredBack`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycRecord {
    pub subject_id: HolderId,
    pub status: KycStatus,
    pub rejection_reason: Option<String>,
    pub refer_back_reason: Option<String>,
    pub submitted_at: Timestamp,
    pub reviewed_at: Option<Timestamp>,
    pub reviewed_by: Option<String>,
}

impl KycRecord {
    /// A freshly submitted record awaiting review.
    pub fn pending(subject_id: HolderId, submitted_at: Timestamp) -> Self {
        Self {
            subject_id,
            status: KycStatus::Pending,
            rejection_reason: None,
            refer_back_reason: None,
            submitted_at,
            reviewed_at: None,
            reviewed_by: None,
        }
    }

    /// Apply a reviewer's decision, stamping reviewer and time and keeping
    /// exactly one reason field populated.
    pub fn apply(
        &mut self,
        outcome: KycOutcome,
        reason: Option<String>,
        reviewer: &str,
        reviewed_at: Timestamp,
    ) {
        self.status = outcome.status();
        self.reviewed_at = Some(reviewed_at);
        self.reviewed_by = Some(reviewer.to_string());
        match outcome {
            KycOutcome::Approved => {
                self.rejection_reason = None;
                self.refer_back_reason = None;
            }
            KycOutcome::Rejected => {
                self.rejection_reason = reason;
                self.refer_back_reason = None;
            }
            KycOutcome::ReferredBack => {
                self.refer_back_reason = reason;
                self.rejection_reason = None;
            }
        }
    }
}
