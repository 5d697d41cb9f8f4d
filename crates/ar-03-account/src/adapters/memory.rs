//! In-memory identity store.
//!
//! Uniqueness checks and the write happen under one lock, matching the
//! unique-constraint semantics a relational backend provides.

use crate::domain::errors::IdentityStoreError;
use crate::domain::identity::{AccountStatus, Identity};
use crate::ports::outbound::IdentityStore;
use async_trait::async_trait;
use shared_types::{IdentityId, Role};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryIdentityStore {
    rows: Mutex<HashMap<IdentityId, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<IdentityId, Identity>>, IdentityStoreError> {
        self.rows
            .lock()
            .map_err(|_| IdentityStoreError::Backend("identity store mutex poisoned".into()))
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn insert(&self, identity: Identity) -> Result<(), IdentityStoreError> {
        let mut rows = self.lock()?;
        for existing in rows.values() {
            if existing.contact.email == identity.contact.email {
                return Err(IdentityStoreError::DuplicateEmail(identity.contact.email));
            }
            if let (Some(a), Some(b)) = (&existing.contact.phone, &identity.contact.phone) {
                if a == b {
                    return Err(IdentityStoreError::DuplicatePhone(b.clone()));
                }
            }
        }
        rows.insert(identity.id, identity);
        Ok(())
    }

    async fn update(&self, identity: Identity) -> Result<(), IdentityStoreError> {
        let mut rows = self.lock()?;
        if !rows.contains_key(&identity.id) {
            return Err(IdentityStoreError::Missing(identity.id));
        }
        rows.insert(identity.id, identity);
        Ok(())
    }

    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>, IdentityStoreError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn find_by_contact(&self, value: &str) -> Result<Option<Identity>, IdentityStoreError> {
        Ok(self
            .lock()?
            .values()
            .find(|i| i.contact.email == value || i.contact.phone.as_deref() == Some(value))
            .cloned())
    }

    async fn list_by_status(
        &self,
        status: AccountStatus,
    ) -> Result<Vec<Identity>, IdentityStoreError> {
        Ok(self
            .lock()?
            .values()
            .filter(|i| i.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Identity>, IdentityStoreError> {
        Ok(self
            .lock()?
            .values()
            .filter(|i| i.role == Some(role))
            .cloned()
            .collect())
    }
}
