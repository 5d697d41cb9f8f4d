//! KYC review application service.

use crate::domain::errors::KycError;
use crate::domain::record::{KycOutcome, KycRecord};
use crate::ports::inbound::KycReviewApi;
use crate::ports::outbound::KycStore;
use async_trait::async_trait;
use shared_types::time::{SystemTimeSource, TimeSource};
use shared_types::{HolderId, KycStatus};
use std::sync::Arc;
use tracing::info;

/// Enforces the review state machine over a [`KycStore`].
pub struct KycReviewService<S: KycStore> {
    store: Arc<S>,
    clock: Arc<dyn TimeSource>,
}

impl<S: KycStore> KycReviewService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemTimeSource),
        }
    }

    pub fn with_clock(store: Arc<S>, clock: Arc<dyn TimeSource>) -> Self {
        Self { store, clock }
    }

    async fn load_required(&self, subject_id: HolderId) -> Result<KycRecord, KycError> {
        self.store
            .find(subject_id)
            .await?
            .ok_or(KycError::NotFound(subject_id))
    }
}

#[async_trait]
impl<S: KycStore> KycReviewApi for KycReviewService<S> {
    async fn submit(&self, subject_id: HolderId) -> Result<KycRecord, KycError> {
        if let Some(existing) = self.store.find(subject_id).await? {
            // Only a referred-back subject may open a fresh review round.
            if existing.status != KycStatus::ReferredBack {
                return Err(KycError::InvalidTransition {
                    subject: subject_id,
                    from: existing.status,
                });
            }
        }

        let record = KycRecord::pending(subject_id, self.clock.now());
        self.store.upsert(record.clone()).await?;
        info!(subject = %subject_id, "kyc review submitted");
        Ok(record)
    }

    async fn decide(
        &self,
        subject_id: HolderId,
        outcome: KycOutcome,
        reason: Option<String>,
        reviewer: &str,
    ) -> Result<KycRecord, KycError> {
        if outcome.requires_reason()
            && reason.as_deref().map_or(true, |r| r.trim().is_empty())
        {
            return Err(KycError::ReasonRequired);
        }

        let mut record = self.load_required(subject_id).await?;
        if record.status != KycStatus::Pending {
            return Err(KycError::InvalidTransition {
                subject: subject_id,
                from: record.status,
            });
        }

        record.apply(outcome, reason, reviewer, self.clock.now());
        self.store.upsert(record.clone()).await?;
        info!(
            subject = %subject_id,
            status = %record.status,
            reviewer,
            "kyc decision recorded"
        );
        Ok(record)
    }

    async fn get(&self, subject_id: HolderId) -> Result<KycRecord, KycError> {
        self.load_required(subject_id).await
    }
}
