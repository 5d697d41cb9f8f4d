//! The workflow coordinator.
//!
//! Holds the three downstream APIs behind their inbound ports and applies
//! the `RoleRoute` table. Subject/holder records share the account's uuid,
//! so the mapping between the two id spaces is a plain re-wrap.

use crate::domain::errors::WorkflowError;
use crate::domain::report::{ApprovalReport, WorkflowWarning};
use crate::domain::route::RoleRoute;
use crate::ports::inbound::WorkflowApi;
use ar_03_account::{AccountLifecycleApi, Identity, RegistrationRequest};
use ar_04_kyc::{KycOutcome, KycRecord, KycReviewApi};
use ar_05_idcard::CredentialArtifactApi;
use async_trait::async_trait;
use shared_types::{HolderId, IdentityId, LocationContext, Role};
use std::sync::Arc;
use tracing::{info, warn};

fn holder_of(id: IdentityId) -> HolderId {
    HolderId(id.0)
}

pub struct WorkflowCoordinator {
    accounts: Arc<dyn AccountLifecycleApi>,
    kyc: Arc<dyn KycReviewApi>,
    issuer: Arc<dyn CredentialArtifactApi>,
}

impl WorkflowCoordinator {
    pub fn new(
        accounts: Arc<dyn AccountLifecycleApi>,
        kyc: Arc<dyn KycReviewApi>,
        issuer: Arc<dyn CredentialArtifactApi>,
    ) -> Self {
        Self {
            accounts,
            kyc,
            issuer,
        }
    }
}

#[async_trait]
impl WorkflowApi for WorkflowCoordinator {
    async fn register(&self, request: RegistrationRequest) -> Result<Identity, WorkflowError> {
        let requires_kyc = request
            .requested_role
            .map(|role| RoleRoute::for_role(role).requires_kyc)
            .unwrap_or(false);

        let mut request = request;
        request.requires_kyc = requires_kyc;
        let identity = self.accounts.register(request).await?;

        if requires_kyc {
            self.kyc.submit(holder_of(identity.id)).await?;
            info!(identity_id = %identity.id, "KYC record opened at registration");
        }

        Ok(identity)
    }

    async fn approve(
        &self,
        id: IdentityId,
        role: Role,
        location: &LocationContext,
    ) -> Result<ApprovalReport, WorkflowError> {
        // Authoritative commit. Everything after this point is best-effort.
        let outcome = self.accounts.approve(id, role).await?;
        info!(identity_id = %id, role = %role, "Approval committed, fanning out");

        let route = RoleRoute::for_role(role);
        let mut warnings = Vec::new();
        let mut card_id = None;

        if let Some(holder_type) = route.card {
            match self
                .issuer
                .issue(holder_type, holder_of(id), &outcome.identity.name, location)
                .await
            {
                Ok(card) => {
                    if let Some(detail) = self
                        .accounts
                        .notify_card_issued(&outcome.identity, &card.card_id)
                        .await
                    {
                        warnings.push(WorkflowWarning::Notification { detail });
                    }
                    card_id = Some(card.card_id);
                }
                Err(err) => {
                    warn!(identity_id = %id, error = %err, "Card issuance failed after approval");
                    warnings.push(WorkflowWarning::CardIssuance {
                        detail: err.to_string(),
                    });
                }
            }
        }

        if let Some(detail) = self.accounts.notify_approval(&outcome).await {
            warnings.push(WorkflowWarning::Notification { detail });
        }

        Ok(ApprovalReport {
            identity_id: id,
            role,
            card_id,
            warnings,
        })
    }

    async fn reject(&self, id: IdentityId) -> Result<Identity, WorkflowError> {
        Ok(self.accounts.reject(id).await?)
    }

    async fn review_kyc(
        &self,
        id: IdentityId,
        outcome: KycOutcome,
        reason: Option<String>,
        reviewer: &str,
    ) -> Result<KycRecord, WorkflowError> {
        let record = self
            .kyc
            .decide(holder_of(id), outcome, reason, reviewer)
            .await?;
        self.accounts.update_kyc_status(id, record.status).await?;
        Ok(record)
    }
}
