//! Account Lifecycle Service
//!
//! Implements `AccountLifecycleApi`. Every operation validates the full
//! transition before touching the store; notification delivery happens
//! strictly after the state commit and can only produce warnings.

use crate::config::AccountConfig;
use crate::domain::credential;
use crate::domain::errors::AccountError;
use crate::domain::identity::{AccountStatus, ApprovalOutcome, Identity, RegistrationRequest};
use crate::ports::inbound::AccountLifecycleApi;
use crate::ports::outbound::{
    IdentityStore, NotificationSender, TemplateKey, VerificationProvider,
};
use async_trait::async_trait;
use shared_types::{IdentityId, KycStatus, Role, SystemTimeSource, TimeSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AccountLifecycleService<S, V, N>
where
    S: IdentityStore,
    V: VerificationProvider,
    N: NotificationSender,
{
    store: Arc<S>,
    verifier: Arc<V>,
    notifier: Arc<N>,
    clock: Arc<dyn TimeSource>,
    config: AccountConfig,
}

impl<S, V, N> AccountLifecycleService<S, V, N>
where
    S: IdentityStore,
    V: VerificationProvider,
    N: NotificationSender,
{
    pub fn new(store: Arc<S>, verifier: Arc<V>, notifier: Arc<N>) -> Self {
        Self {
            store,
            verifier,
            notifier,
            clock: Arc::new(SystemTimeSource),
            config: AccountConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AccountConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Look up an identity by email or phone.
    pub async fn find_by_contact(&self, value: &str) -> Result<Option<Identity>, AccountError> {
        Ok(self.store.find_by_contact(value).await?)
    }

    pub async fn list_by_status(
        &self,
        status: AccountStatus,
    ) -> Result<Vec<Identity>, AccountError> {
        Ok(self.store.list_by_status(status).await?)
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<Identity>, AccountError> {
        Ok(self.store.list_by_role(role).await?)
    }

    async fn load(&self, id: IdentityId) -> Result<Identity, AccountError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id))
    }

    /// Fire a notification and convert any failure into a warning string.
    async fn notify(
        &self,
        recipient: &str,
        template: TemplateKey,
        variables: HashMap<String, String>,
    ) -> Option<String> {
        match self.notifier.send(recipient, template, variables).await {
            Ok(()) => None,
            Err(err) => {
                warn!(
                    recipient,
                    template = template.as_str(),
                    error = %err,
                    "Notification delivery failed"
                );
                Some(format!("{}: {err}", template.as_str()))
            }
        }
    }
}

#[async_trait]
impl<S, V, N> AccountLifecycleApi for AccountLifecycleService<S, V, N>
where
    S: IdentityStore,
    V: VerificationProvider,
    N: NotificationSender,
{
    async fn register(&self, request: RegistrationRequest) -> Result<Identity, AccountError> {
        // Duplicate checks before the verification gate so callers learn the
        // cheapest failure first.
        if let Some(existing) = self.store.find_by_contact(&request.contact.email).await? {
            warn!(email = %request.contact.email, existing = %existing.id, "Email already registered");
            return Err(AccountError::DuplicateContact(request.contact.email));
        }
        if let Some(phone) = &request.contact.phone {
            if self.store.find_by_contact(phone).await?.is_some() {
                warn!(phone = %phone, "Phone already registered");
                return Err(AccountError::DuplicateContact(phone.clone()));
            }
        }

        if !self.verifier.is_verified(&request.contact.email).await {
            return Err(AccountError::VerificationNotCompleted(
                request.contact.email,
            ));
        }

        let identity = Identity {
            id: IdentityId::new(),
            name: request.name,
            contact: request.contact,
            requested_role: request.requested_role,
            role: None,
            status: AccountStatus::Pending,
            credential_digest: None,
            must_change_credential: false,
            kyc_status: request.requires_kyc.then_some(KycStatus::Pending),
            registered_at: self.clock.now(),
        };
        self.store.insert(identity.clone()).await?;
        self.verifier.clear_verification(&identity.contact.email).await;

        info!(identity_id = %identity.id, email = %identity.contact.email, "Identity registered");

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), identity.name.clone());
        self.notify(&identity.contact.email, TemplateKey::Welcome, variables)
            .await;

        Ok(identity)
    }

    async fn approve(&self, id: IdentityId, role: Role) -> Result<ApprovalOutcome, AccountError> {
        let identity = self.load(id).await?;
        if !identity.can_be_approved() {
            return Err(AccountError::InvalidStateForApproval {
                id,
                current: identity.status,
            });
        }

        let one_time = credential::generate_one_time(self.config.one_time_credential_length);
        let mut approved = identity;
        approved.role = Some(role);
        approved.status = AccountStatus::Approved;
        approved.credential_digest = Some(credential::digest(&one_time));
        approved.must_change_credential = true;

        self.store.update(approved.clone()).await?;
        info!(identity_id = %id, role = %role, "Identity approved");

        Ok(ApprovalOutcome {
            identity: approved,
            one_time_credential: one_time,
        })
    }

    async fn notify_approval(&self, outcome: &ApprovalOutcome) -> Option<String> {
        let mut variables = HashMap::new();
        variables.insert("name".to_string(), outcome.identity.name.clone());
        variables.insert(
            "one_time_credential".to_string(),
            outcome.one_time_credential.clone(),
        );
        self.notify(
            &outcome.identity.contact.email,
            TemplateKey::AccountApproved,
            variables,
        )
        .await
    }

    async fn notify_card_issued(&self, identity: &Identity, card_id: &str) -> Option<String> {
        let mut variables = HashMap::new();
        variables.insert("name".to_string(), identity.name.clone());
        variables.insert("card_id".to_string(), card_id.to_string());
        self.notify(&identity.contact.email, TemplateKey::CardIssued, variables)
            .await
    }

    async fn reject(&self, id: IdentityId) -> Result<Identity, AccountError> {
        let identity = self.load(id).await?;
        if !identity.can_be_rejected() {
            return Err(AccountError::InvalidStateForRejection {
                id,
                current: identity.status,
            });
        }

        let mut rejected = identity;
        rejected.status = AccountStatus::Rejected;
        self.store.update(rejected.clone()).await?;
        info!(identity_id = %id, "Identity rejected");

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), rejected.name.clone());
        self.notify(
            &rejected.contact.email,
            TemplateKey::AccountRejected,
            variables,
        )
        .await;

        Ok(rejected)
    }

    async fn change_credential(
        &self,
        id: IdentityId,
        new_credential: &str,
    ) -> Result<Identity, AccountError> {
        if new_credential.len() < self.config.min_credential_length {
            return Err(AccountError::InvalidCredential(format!(
                "must be at least {} characters",
                self.config.min_credential_length
            )));
        }

        let identity = self.load(id).await?;
        if identity.credential_digest.is_none() {
            return Err(AccountError::NoCredentialIssued(id));
        }

        let mut updated = identity;
        updated.credential_digest = Some(credential::digest(new_credential));
        updated.must_change_credential = false;
        self.store.update(updated.clone()).await?;
        info!(identity_id = %id, "Credential changed");

        let mut variables = HashMap::new();
        variables.insert("name".to_string(), updated.name.clone());
        self.notify(
            &updated.contact.email,
            TemplateKey::CredentialChanged,
            variables,
        )
        .await;

        Ok(updated)
    }

    async fn update_kyc_status(
        &self,
        id: IdentityId,
        status: KycStatus,
    ) -> Result<Identity, AccountError> {
        let mut identity = self.load(id).await?;
        identity.kyc_status = Some(status);
        self.store.update(identity.clone()).await?;
        info!(identity_id = %id, kyc_status = %status, "KYC status mirrored to account");
        Ok(identity)
    }

    async fn get(&self, id: IdentityId) -> Result<Identity, AccountError> {
        self.load(id).await
    }
}
