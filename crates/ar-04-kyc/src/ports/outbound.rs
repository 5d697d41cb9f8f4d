//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::KycStoreError;
use crate::domain::record::KycRecord;
use async_trait::async_trait;
use shared_types::HolderId;

/// Persistence port for KYC records, keyed by subject id.
#[async_trait]
pub trait KycStore: Send + Sync {
    async fn find(&self, subject_id: HolderId) -> Result<Option<KycRecord>, KycStoreError>;

    /// Insert or replace the record for its subject.
    async fn upsert(&self, record: KycRecord) -> Result<(), KycStoreError>;
}
