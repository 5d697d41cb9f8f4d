//! In-memory KYC record store.

use crate::domain::errors::KycStoreError;
use crate::domain::record::KycRecord;
use crate::ports::outbound::KycStore;
use async_trait::async_trait;
use shared_types::HolderId;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryKycStore {
    rows: Mutex<HashMap<HolderId, KycRecord>>,
}

impl InMemoryKycStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KycStore for InMemoryKycStore {
    async fn find(&self, subject_id: HolderId) -> Result<Option<KycRecord>, KycStoreError> {
        self.rows
            .lock()
            .map(|rows| rows.get(&subject_id).cloned())
            .map_err(|_| KycStoreError::Backend("kyc store mutex poisoned".into()))
    }

    async fn upsert(&self, record: KycRecord) -> Result<(), KycStoreError> {
        self.rows
            .lock()
            .map(|mut rows| {
                rows.insert(record.subject_id, record);
            })
            .map_err(|_| KycStoreError::Backend("kyc store mutex poisoned".into()))
    }
}
