//! Credential issuer application service.
//!
//! Issuance order matters: reserve sequence, persist the card record, then
//! render. The record is authoritative the moment it is persisted; rendering
//! is the one step allowed to fail without losing the card.

use crate::config::IssuerConfig;
use crate::domain::card::{CardStatistics, CardStatus, CredentialArtifact, IssuedIdentifier};
use crate::domain::errors::IssueError;
use crate::ports::inbound::CredentialArtifactApi;
use crate::ports::outbound::{CardStore, RenderingService};
use ar_01_sequence::SequenceAllocatorApi;
use ar_02_identifier::{composite_code, LocationCodeLookup};
use async_trait::async_trait;
use shared_types::{HolderId, HolderType, LocationContext, SystemTimeSource, TimeSource};
use std::sync::Arc;
use tracing::{info, warn};

pub struct CredentialIssuerService<S: CardStore, R: RenderingService> {
    store: Arc<S>,
    renderer: Arc<R>,
    sequence: Arc<dyn SequenceAllocatorApi>,
    location: Arc<dyn LocationCodeLookup>,
    clock: Arc<dyn TimeSource>,
    config: IssuerConfig,
}

impl<S: CardStore, R: RenderingService> CredentialIssuerService<S, R> {
    pub fn new(
        store: Arc<S>,
        renderer: Arc<R>,
        sequence: Arc<dyn SequenceAllocatorApi>,
        location: Arc<dyn LocationCodeLookup>,
    ) -> Self {
        Self {
            store,
            renderer,
            sequence,
            location,
            clock: Arc::new(SystemTimeSource),
            config: IssuerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: IssuerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    async fn load_required(&self, card_id: &str) -> Result<CredentialArtifact, IssueError> {
        self.store
            .find(card_id)
            .await?
            .ok_or_else(|| IssueError::CardNotFound(card_id.into()))
    }

    /// Render and attach refs, updating the stored record. On failure the
    /// record keeps whatever refs it had and the caller gets
    /// `RenderingUnavailable`.
    async fn render_into(
        &self,
        mut card: CredentialArtifact,
    ) -> Result<CredentialArtifact, IssueError> {
        match self.renderer.render(&card).await {
            Ok(refs) => {
                card.artifact_refs = Some(refs);
                self.store.update(card.clone()).await?;
                Ok(card)
            }
            Err(err) => {
                warn!(card_id = %card.card_id, error = %err, "Card rendering failed");
                Err(IssueError::RenderingUnavailable {
                    card_id: card.card_id,
                })
            }
        }
    }
}

#[async_trait]
impl<S: CardStore, R: RenderingService> CredentialArtifactApi for CredentialIssuerService<S, R> {
    async fn issue(
        &self,
        holder_type: HolderType,
        holder_id: HolderId,
        holder_name: &str,
        location: &LocationContext,
    ) -> Result<CredentialArtifact, IssueError> {
        // Duplicate-delivery guard: one Active card per (holder, type).
        if let Some(existing) = self.store.find_active(holder_id, holder_type).await? {
            info!(
                card_id = %existing.card_id,
                holder = %holder_id,
                "Issue request matched existing active card"
            );
            return Ok(existing);
        }

        let series_key = holder_type.series_key();
        let reserved = self.sequence.reserve_next(series_key).await?;
        let state_code = self.location.code_for(&location.state);
        let country_code = self.location.code_for(&location.country);
        let card_id = composite_code(holder_type, &state_code, &country_code, reserved);

        self.store
            .record_identifier(IssuedIdentifier {
                value: card_id.clone(),
                owner_type: holder_type,
                owner_id: holder_id,
                series_key: series_key.to_string(),
                reserved_sequence: reserved,
            })
            .await?;

        let now = self.clock.now();
        let card = CredentialArtifact {
            card_id: card_id.clone(),
            holder_type,
            holder_id,
            holder_name: holder_name.to_string(),
            status: CardStatus::Active,
            generated_at: now,
            expires_at: now + self.config.validity_secs,
            artifact_refs: None,
        };
        self.store.insert(card.clone()).await?;
        info!(card_id = %card_id, holder = %holder_id, holder_type = %holder_type, "Card issued");

        self.render_into(card).await
    }

    async fn regenerate(&self, card_id: &str) -> Result<CredentialArtifact, IssueError> {
        let mut card = self.load_required(card_id).await?;
        if !card.can_regenerate() {
            return Err(IssueError::InvalidState {
                card_id: card_id.into(),
                status: card.status,
            });
        }

        card.generated_at = self.clock.now();
        info!(card_id, "Card regeneration requested");
        self.render_into(card).await
    }

    async fn revoke(&self, card_id: &str) -> Result<CredentialArtifact, IssueError> {
        let mut card = self.load_required(card_id).await?;
        if card.status == CardStatus::Revoked {
            return Ok(card);
        }

        card.status = CardStatus::Revoked;
        self.store.update(card.clone()).await?;
        info!(card_id, "Card revoked");
        Ok(card)
    }

    async fn mark_expired(&self, card_id: &str) -> Result<CredentialArtifact, IssueError> {
        let mut card = self.load_required(card_id).await?;
        match card.status {
            CardStatus::Expired => Ok(card),
            CardStatus::Revoked => Err(IssueError::InvalidState {
                card_id: card_id.into(),
                status: card.status,
            }),
            CardStatus::Active => {
                card.status = CardStatus::Expired;
                self.store.update(card.clone()).await?;
                info!(card_id, "Card marked expired");
                Ok(card)
            }
        }
    }

    async fn get(&self, card_id: &str) -> Result<CredentialArtifact, IssueError> {
        self.load_required(card_id).await
    }

    async fn cards_for_holder(
        &self,
        holder_id: HolderId,
    ) -> Result<Vec<CredentialArtifact>, IssueError> {
        Ok(self.store.list_for_holder(holder_id).await?)
    }

    async fn statistics(&self) -> Result<CardStatistics, IssueError> {
        let mut stats = CardStatistics::default();
        for card in self.store.list_all().await? {
            stats.record(&card);
        }
        Ok(stats)
    }
}
