//! Outbound Ports (Driven Ports / SPI)

use crate::domain::card::{ArtifactRefs, CredentialArtifact, IssuedIdentifier};
use crate::domain::errors::{CardStoreError, RenderError};
use async_trait::async_trait;
use shared_types::{HolderId, HolderType};

/// Persistence port for issued cards, keyed by card id.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Insert a new card. Card ids are unique forever.
    async fn insert(&self, card: CredentialArtifact) -> Result<(), CardStoreError>;

    /// Replace an existing card record.
    async fn update(&self, card: CredentialArtifact) -> Result<(), CardStoreError>;

    async fn find(&self, card_id: &str) -> Result<Option<CredentialArtifact>, CardStoreError>;

    /// The holder's Active card of the given type, if any.
    async fn find_active(
        &self,
        holder_id: HolderId,
        holder_type: HolderType,
    ) -> Result<Option<CredentialArtifact>, CardStoreError>;

    async fn list_for_holder(
        &self,
        holder_id: HolderId,
    ) -> Result<Vec<CredentialArtifact>, CardStoreError>;

    async fn list_all(&self) -> Result<Vec<CredentialArtifact>, CardStoreError>;

    /// Append to the identifier ledger.
    async fn record_identifier(&self, identifier: IssuedIdentifier) -> Result<(), CardStoreError>;

    async fn list_identifiers(&self) -> Result<Vec<IssuedIdentifier>, CardStoreError>;
}

/// Rendering port. Produces the downloadable artifact files for a card.
#[async_trait]
pub trait RenderingService: Send + Sync {
    async fn render(&self, card: &CredentialArtifact) -> Result<ArtifactRefs, RenderError>;
}
