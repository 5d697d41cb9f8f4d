//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::{IdentityStoreError, NotifyError};
use crate::domain::identity::{AccountStatus, Identity};
use async_trait::async_trait;
use shared_types::{IdentityId, Role};
use std::collections::HashMap;

/// Persistence port for identities.
///
/// `insert` enforces the global uniqueness of email and phone; a violation
/// surfaces as `DuplicateEmail`/`DuplicatePhone` and writes nothing.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn insert(&self, identity: Identity) -> Result<(), IdentityStoreError>;

    /// Replace the stored identity; fails with `Missing` if never inserted.
    async fn update(&self, identity: Identity) -> Result<(), IdentityStoreError>;

    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>, IdentityStoreError>;

    /// Look up by email or phone value.
    async fn find_by_contact(&self, value: &str) -> Result<Option<Identity>, IdentityStoreError>;

    async fn list_by_status(
        &self,
        status: AccountStatus,
    ) -> Result<Vec<Identity>, IdentityStoreError>;

    async fn list_by_role(&self, role: Role) -> Result<Vec<Identity>, IdentityStoreError>;
}

/// Contact verification provider (OTP or equivalent). Generation and
/// transport of the challenge live outside this core.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    async fn is_verified(&self, contact: &str) -> bool;

    /// Consume the verification record after a successful registration.
    async fn clear_verification(&self, contact: &str);
}

/// Notification template, resolved to content by the sending collaborator.
/// This core only names the template and supplies its variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Welcome,
    AccountApproved,
    AccountRejected,
    CredentialChanged,
    CardIssued,
}

impl TemplateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "account.welcome",
            Self::AccountApproved => "account.approved",
            Self::AccountRejected => "account.rejected",
            Self::CredentialChanged => "account.credential-changed",
            Self::CardIssued => "card.issued",
        }
    }
}

/// Outbound notification delivery.
///
/// Strictly best-effort: callers log failures and carry on. No workflow
/// state may ever depend on the result.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(
        &self,
        recipient: &str,
        template: TemplateKey,
        variables: HashMap<String, String>,
    ) -> Result<(), NotifyError>;
}
