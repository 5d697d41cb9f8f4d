//! Inbound Ports (Driving Ports / API)

use crate::domain::card::{CardStatistics, CredentialArtifact};
use crate::domain::errors::IssueError;
use async_trait::async_trait;
use shared_types::{HolderId, HolderType, LocationContext};

/// Primary card issuance API.
#[async_trait]
pub trait CredentialArtifactApi: Send + Sync {
    /// Issue a card for a holder.
    ///
    /// Idempotent against duplicate delivery: if the holder already has an
    /// Active card of this type, that card is returned unchanged and no
    /// sequence number is consumed. Otherwise a new composite card id is
    /// minted, the record persisted, and the artifact rendered. Rendering
    /// failure leaves the persisted record without refs and fails with
    /// `RenderingUnavailable`.
    async fn issue(
        &self,
        holder_type: HolderType,
        holder_id: HolderId,
        holder_name: &str,
        location: &LocationContext,
    ) -> Result<CredentialArtifact, IssueError>;

    /// Re-render an existing card in place, keeping its card id.
    ///
    /// Allowed from Active and Expired; `InvalidState` from Revoked.
    async fn regenerate(&self, card_id: &str) -> Result<CredentialArtifact, IssueError>;

    /// Revoke a card. Idempotent; Revoked is terminal.
    async fn revoke(&self, card_id: &str) -> Result<CredentialArtifact, IssueError>;

    /// Administrative Active -> Expired transition.
    async fn mark_expired(&self, card_id: &str) -> Result<CredentialArtifact, IssueError>;

    async fn get(&self, card_id: &str) -> Result<CredentialArtifact, IssueError>;

    async fn cards_for_holder(
        &self,
        holder_id: HolderId,
    ) -> Result<Vec<CredentialArtifact>, IssueError>;

    /// Aggregate counts across every issued card.
    async fn statistics(&self) -> Result<CardStatistics, IssueError>;
}
