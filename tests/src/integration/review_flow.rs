//! KYC review and card lifecycle choreography.

#[cfg(test)]
mod tests {
    use crate::integration::{registry, tamil_nadu};
    use ar_03_account::{AccountLifecycleApi, Identity, RegistrationRequest};
    use ar_04_kyc::{KycError, KycOutcome, KycReviewApi};
    use ar_05_idcard::{CardStatus, CredentialArtifactApi, IssueError};
    use ar_06_workflow::{WorkflowApi, WorkflowError};
    use shared_types::{Contact, HolderId, HolderType, KycStatus, Role};

    async fn registered_farmer(reg: &crate::integration::Registry, email: &str) -> Identity {
        reg.verifier.mark_verified(email);
        reg.workflow
            .register(
                RegistrationRequest::new("Asha Devi", Contact::email_only(email))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_refer_back_resubmit_approve_cycle() {
        let reg = registry().await;
        let identity = registered_farmer(&reg, "asha@example.com").await;
        let holder = HolderId(identity.id.0);

        // Refer back for missing documents; reason and review stamps land.
        let record = reg
            .workflow
            .review_kyc(
                identity.id,
                KycOutcome::ReferredBack,
                Some("missing documents".into()),
                "officer@agri.example",
            )
            .await
            .unwrap();
        assert_eq!(record.status, KycStatus::ReferredBack);
        assert_eq!(record.refer_back_reason.as_deref(), Some("missing documents"));
        assert!(record.reviewed_at.is_some());
        assert_eq!(record.reviewed_by.as_deref(), Some("officer@agri.example"));

        let account = reg.accounts.get(identity.id).await.unwrap();
        assert_eq!(account.kyc_status, Some(KycStatus::ReferredBack));

        // The subject resubmits and the reviewer approves.
        reg.kyc.submit(holder).await.unwrap();
        let record = reg
            .workflow
            .review_kyc(identity.id, KycOutcome::Approved, None, "officer@agri.example")
            .await
            .unwrap();
        assert_eq!(record.status, KycStatus::Approved);
        assert!(record.refer_back_reason.is_none());

        let account = reg.accounts.get(identity.id).await.unwrap();
        assert_eq!(account.kyc_status, Some(KycStatus::Approved));
    }

    #[tokio::test]
    async fn test_kyc_rejection_demands_reason() {
        let reg = registry().await;
        let identity = registered_farmer(&reg, "asha@example.com").await;

        let err = reg
            .workflow
            .review_kyc(identity.id, KycOutcome::Rejected, None, "officer")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Kyc(KycError::ReasonRequired)
        ));

        // The record is untouched and still decidable.
        let record = reg.kyc.get(HolderId(identity.id.0)).await.unwrap();
        assert_eq!(record.status, KycStatus::Pending);
    }

    #[tokio::test]
    async fn test_settled_kyc_record_rejects_second_decision() {
        let reg = registry().await;
        let identity = registered_farmer(&reg, "asha@example.com").await;

        reg.workflow
            .review_kyc(identity.id, KycOutcome::Approved, None, "officer")
            .await
            .unwrap();

        let err = reg
            .workflow
            .review_kyc(
                identity.id,
                KycOutcome::Rejected,
                Some("second thoughts".into()),
                "officer",
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Kyc(KycError::InvalidTransition {
                from: KycStatus::Approved,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent_and_terminal() {
        let reg = registry().await;
        let holder = HolderId::new();

        let card = reg
            .issuer
            .issue(HolderType::Farmer, holder, "Anand Kumar", &tamil_nadu())
            .await
            .unwrap();

        let first = reg.issuer.revoke(&card.card_id).await.unwrap();
        let second = reg.issuer.revoke(&card.card_id).await.unwrap();
        assert_eq!(first.status, CardStatus::Revoked);
        assert_eq!(second.status, CardStatus::Revoked);

        // Terminal: no re-render, and replacement mints a fresh id.
        let err = reg.issuer.regenerate(&card.card_id).await.unwrap_err();
        assert!(matches!(err, IssueError::InvalidState { .. }));

        let replacement = reg
            .issuer
            .issue(HolderType::Farmer, holder, "Anand Kumar", &tamil_nadu())
            .await
            .unwrap();
        assert_ne!(replacement.card_id, card.card_id);
    }

    #[tokio::test]
    async fn test_expiry_and_statistics() {
        let reg = registry().await;
        let farmer = HolderId::new();
        let fpo = HolderId::new();

        let card = reg
            .issuer
            .issue(HolderType::Farmer, farmer, "Anand Kumar", &tamil_nadu())
            .await
            .unwrap();
        reg.issuer
            .issue(HolderType::Organization, fpo, "Green Valley FPO", &tamil_nadu())
            .await
            .unwrap();

        reg.issuer.mark_expired(&card.card_id).await.unwrap();

        let stats = reg.issuer.statistics().await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.by_holder_type.get("FARMER"), Some(&1));
        assert_eq!(stats.by_holder_type.get("FPO"), Some(&1));

        // Expired cards regenerate without a new id.
        let renewed = reg.issuer.regenerate(&card.card_id).await.unwrap();
        assert_eq!(renewed.card_id, card.card_id);
    }
}
