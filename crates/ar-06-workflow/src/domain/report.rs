//! Approval reports and side-effect warnings.

use serde::{Deserialize, Serialize};
use shared_types::{IdentityId, Role};
use std::fmt;

/// A side effect that failed after the approval committed.
///
/// Warnings are retryable out of band: card issuance through `regenerate`
/// or a fresh `issue`, notifications through redelivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowWarning {
    CardIssuance { detail: String },
    Notification { detail: String },
}

impl fmt::Display for WorkflowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardIssuance { detail } => write!(f, "card issuance failed: {detail}"),
            Self::Notification { detail } => write!(f, "notification failed: {detail}"),
        }
    }
}

/// What an approval actually did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalReport {
    pub identity_id: IdentityId,
    pub role: Role,
    /// Card id when the role's route issues one and issuance succeeded.
    pub card_id: Option<String>,
    pub warnings: Vec<WorkflowWarning>,
}

impl ApprovalReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
