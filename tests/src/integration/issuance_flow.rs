//! Registration-to-card choreography.

#[cfg(test)]
mod tests {
    use crate::integration::{registry, tamil_nadu};
    use ar_03_account::{
        AccountError, AccountLifecycleApi, AccountStatus, RegistrationRequest, TemplateKey,
    };
    use ar_05_idcard::{CardStatus, CredentialArtifactApi};
    use ar_06_workflow::{WorkflowApi, WorkflowWarning};
    use shared_types::{Contact, HolderId, HolderType, KycStatus, Role};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_farmer_end_to_end_register_approve_card() {
        let reg = registry().await;
        reg.verifier.mark_verified("asha@example.com");

        let identity = reg
            .workflow
            .register(
                RegistrationRequest::new("Asha Devi", Contact::email_only("asha@example.com"))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap();
        assert_eq!(identity.status, AccountStatus::Pending);
        assert_eq!(identity.kyc_status, Some(KycStatus::Pending));

        let report = reg
            .workflow
            .approve(identity.id, Role::Farmer, &tamil_nadu())
            .await
            .unwrap();
        assert!(report.is_clean());
        let card_id = report.card_id.unwrap();
        assert_eq!(card_id, "FRMTNIN0001");

        // Account carries the role, the credential gate, and the card exists.
        let approved = reg.accounts.get(identity.id).await.unwrap();
        assert_eq!(approved.status, AccountStatus::Approved);
        assert!(approved.must_change_credential);
        assert!(approved.credential_digest.is_some());

        let card = reg.issuer.get(&card_id).await.unwrap();
        assert_eq!(card.status, CardStatus::Active);
        assert_eq!(card.holder_type, HolderType::Farmer);
        assert_eq!(card.holder_name, "Asha Devi");
        assert!(card.artifact_refs.is_some());

        // The one-time credential went out exactly once.
        let approvals: Vec<_> = reg
            .notifier
            .sent()
            .into_iter()
            .filter(|n| n.template == TemplateKey::AccountApproved)
            .collect();
        assert_eq!(approvals.len(), 1);
        assert!(approvals[0].variables.contains_key("one_time_credential"));
    }

    #[tokio::test]
    async fn test_duplicate_registration_performs_no_writes() {
        let reg = registry().await;
        reg.verifier.mark_verified("asha@example.com");

        reg.workflow
            .register(
                RegistrationRequest::new("Asha Devi", Contact::email_only("asha@example.com"))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap();
        let sent_before = reg.notifier.sent_count();

        reg.verifier.mark_verified("asha@example.com");
        let err = reg
            .workflow
            .register(
                RegistrationRequest::new("Impostor", Contact::email_only("asha@example.com"))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("asha@example.com"));

        // No second identity, no second welcome.
        let pending = reg.accounts.list_by_status(AccountStatus::Pending).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(reg.notifier.sent_count(), sent_before);
    }

    #[tokio::test]
    async fn test_unverified_contact_is_refused() {
        let reg = registry().await;

        let err = reg
            .workflow
            .register(
                RegistrationRequest::new("Asha Devi", Contact::email_only("asha@example.com"))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ar_06_workflow::WorkflowError::Account(AccountError::VerificationNotCompleted(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_issuance_yields_distinct_contiguous_ids() {
        let reg = registry().await;
        let issuer = Arc::clone(&reg.issuer);

        let mut handles = Vec::new();
        for name in ["Anand", "Bhavna", "Chitra"] {
            let issuer = Arc::clone(&issuer);
            let location = tamil_nadu();
            handles.push(tokio::spawn(async move {
                issuer
                    .issue(HolderType::Farmer, HolderId::new(), name, &location)
                    .await
            }));
        }

        let mut card_ids = HashSet::new();
        for handle in handles {
            let card = handle.await.unwrap().unwrap();
            assert!(card_ids.insert(card.card_id), "card ids must be distinct");
        }

        let expected: HashSet<String> = ["FRMTNIN0001", "FRMTNIN0002", "FRMTNIN0003"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(card_ids, expected);
    }

    #[tokio::test]
    async fn test_rendering_outage_keeps_approval_and_recovers() {
        let reg = registry().await;
        reg.verifier.mark_verified("asha@example.com");
        let identity = reg
            .workflow
            .register(
                RegistrationRequest::new("Asha Devi", Contact::email_only("asha@example.com"))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap();

        reg.renderer.set_failing(true);
        let report = reg
            .workflow
            .approve(identity.id, Role::Farmer, &tamil_nadu())
            .await
            .unwrap();
        assert!(report
            .warnings
            .iter()
            .any(|w| matches!(w, WorkflowWarning::CardIssuance { .. })));
        assert_eq!(report.card_id, None);

        let approved = reg.accounts.get(identity.id).await.unwrap();
        assert_eq!(approved.status, AccountStatus::Approved);

        // The card record survived the outage and regenerates in place.
        let holder = HolderId(identity.id.0);
        let cards = reg.issuer.cards_for_holder(holder).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert!(cards[0].artifact_refs.is_none());

        reg.renderer.set_failing(false);
        let card = reg.issuer.regenerate(&cards[0].card_id).await.unwrap();
        assert!(card.artifact_refs.is_some());
        assert_eq!(card.card_id, cards[0].card_id);
    }

    #[tokio::test]
    async fn test_reapproval_after_rejection() {
        let reg = registry().await;
        reg.verifier.mark_verified("asha@example.com");
        let identity = reg
            .workflow
            .register(
                RegistrationRequest::new("Asha Devi", Contact::email_only("asha@example.com"))
                    .with_requested_role(Role::Farmer),
            )
            .await
            .unwrap();

        reg.workflow.reject(identity.id).await.unwrap();
        let rejected = reg.accounts.get(identity.id).await.unwrap();
        assert_eq!(rejected.status, AccountStatus::Rejected);

        // Appeal path: a rejected account can still be approved.
        let report = reg
            .workflow
            .approve(identity.id, Role::Farmer, &tamil_nadu())
            .await
            .unwrap();
        assert!(report.card_id.is_some());

        // A second approval of an approved account fails cleanly.
        let err = reg
            .workflow
            .approve(identity.id, Role::Farmer, &tamil_nadu())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ar_06_workflow::WorkflowError::Account(AccountError::InvalidStateForApproval { .. })
        ));
    }
}
