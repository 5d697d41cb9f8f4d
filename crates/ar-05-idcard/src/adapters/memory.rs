//! In-memory card store.

use crate::domain::card::{CardStatus, CredentialArtifact, IssuedIdentifier};
use crate::domain::errors::CardStoreError;
use crate::ports::outbound::CardStore;
use async_trait::async_trait;
use shared_types::{HolderId, HolderType};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCardStore {
    rows: Mutex<HashMap<String, CredentialArtifact>>,
    ledger: Mutex<Vec<IssuedIdentifier>>,
}

impl InMemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> CardStoreError {
        CardStoreError::Backend("card store mutex poisoned".into())
    }
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn insert(&self, card: CredentialArtifact) -> Result<(), CardStoreError> {
        let mut rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        if rows.contains_key(&card.card_id) {
            return Err(CardStoreError::DuplicateCardId(card.card_id));
        }
        rows.insert(card.card_id.clone(), card);
        Ok(())
    }

    async fn update(&self, card: CredentialArtifact) -> Result<(), CardStoreError> {
        let mut rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        rows.insert(card.card_id.clone(), card);
        Ok(())
    }

    async fn find(&self, card_id: &str) -> Result<Option<CredentialArtifact>, CardStoreError> {
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        Ok(rows.get(card_id).cloned())
    }

    async fn find_active(
        &self,
        holder_id: HolderId,
        holder_type: HolderType,
    ) -> Result<Option<CredentialArtifact>, CardStoreError> {
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        Ok(rows
            .values()
            .find(|card| {
                card.holder_id == holder_id
                    && card.holder_type == holder_type
                    && card.status == CardStatus::Active
            })
            .cloned())
    }

    async fn list_for_holder(
        &self,
        holder_id: HolderId,
    ) -> Result<Vec<CredentialArtifact>, CardStoreError> {
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        let mut cards: Vec<_> = rows
            .values()
            .filter(|card| card.holder_id == holder_id)
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.card_id.cmp(&b.card_id));
        Ok(cards)
    }

    async fn list_all(&self) -> Result<Vec<CredentialArtifact>, CardStoreError> {
        let rows = self.rows.lock().map_err(|_| Self::poisoned())?;
        Ok(rows.values().cloned().collect())
    }

    async fn record_identifier(&self, identifier: IssuedIdentifier) -> Result<(), CardStoreError> {
        let mut ledger = self.ledger.lock().map_err(|_| Self::poisoned())?;
        ledger.push(identifier);
        Ok(())
    }

    async fn list_identifiers(&self) -> Result<Vec<IssuedIdentifier>, CardStoreError> {
        let ledger = self.ledger.lock().map_err(|_| Self::poisoned())?;
        Ok(ledger.clone())
    }
}
