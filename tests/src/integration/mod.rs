//! Cross-subsystem integration scenarios.
//!
//! `Registry` wires every subsystem together with in-memory adapters, the
//! way the composition root does in a deployment, and each scenario drives
//! the stack through the workflow coordinator only.

pub mod issuance_flow;
pub mod review_flow;

use std::sync::Arc;

use ar_01_sequence::{InMemorySeriesStore, SequenceAllocatorService, SeriesSpec};
use ar_02_identifier::StaticLocationTable;
use ar_03_account::{
    AccountLifecycleApi, AccountLifecycleService, InMemoryIdentityStore, RecordingNotifier,
    StaticVerification,
};
use ar_04_kyc::{InMemoryKycStore, KycReviewApi, KycReviewService};
use ar_05_idcard::{
    CredentialArtifactApi, CredentialIssuerService, InMemoryCardStore, StubRenderer,
};
use ar_06_workflow::WorkflowCoordinator;
use shared_types::LocationContext;

pub struct Registry {
    pub workflow: WorkflowCoordinator,
    pub accounts: Arc<
        AccountLifecycleService<InMemoryIdentityStore, StaticVerification, RecordingNotifier>,
    >,
    pub kyc: Arc<KycReviewService<InMemoryKycStore>>,
    pub issuer: Arc<CredentialIssuerService<InMemoryCardStore, StubRenderer>>,
    pub verifier: Arc<StaticVerification>,
    pub notifier: Arc<RecordingNotifier>,
    pub renderer: Arc<StubRenderer>,
}

pub async fn registry() -> Registry {
    crate::init_tracing();

    let verifier = Arc::new(StaticVerification::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let accounts = Arc::new(AccountLifecycleService::new(
        Arc::new(InMemoryIdentityStore::new()),
        Arc::clone(&verifier),
        Arc::clone(&notifier),
    ));

    let kyc = Arc::new(KycReviewService::new(Arc::new(InMemoryKycStore::new())));

    let allocator = SequenceAllocatorService::new(Arc::new(InMemorySeriesStore::new()));
    for (key, prefix) in [
        ("FARMER", "FRM"),
        ("EMPLOYEE", "EMP"),
        ("FPO", "FPO"),
        ("MEMBER", "MBR"),
    ] {
        allocator
            .create_series(SeriesSpec::new(key, prefix, 1))
            .await
            .expect("series creation");
    }

    let renderer = Arc::new(StubRenderer::new());
    let issuer = Arc::new(CredentialIssuerService::new(
        Arc::new(InMemoryCardStore::new()),
        Arc::clone(&renderer),
        Arc::new(allocator),
        Arc::new(StaticLocationTable::new()),
    ));

    let workflow = WorkflowCoordinator::new(
        Arc::clone(&accounts) as Arc<dyn AccountLifecycleApi>,
        Arc::clone(&kyc) as Arc<dyn KycReviewApi>,
        Arc::clone(&issuer) as Arc<dyn CredentialArtifactApi>,
    );

    Registry {
        workflow,
        accounts,
        kyc,
        issuer,
        verifier,
        notifier,
        renderer,
    }
}

pub fn tamil_nadu() -> LocationContext {
    LocationContext::new("TAMIL NADU", "INDIA")
}
