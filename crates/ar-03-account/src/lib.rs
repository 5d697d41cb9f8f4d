//! # AR-03: Account Lifecycle Subsystem
//!
//! Drives an applicant account through the registration → verification →
//! pending → approved/rejected lifecycle, including role assignment and
//! one-time credential issuance.
//!
//! The approval transition is the durable, authoritative fact: once it
//! commits, downstream side effects (card issuance, notification delivery)
//! may fail and be retried without ever rolling the account back.
//!
//! ## Architecture
//!
//! - **Domain**: `Identity` state machine, credential material
//! - **Ports**: Inbound (`AccountLifecycleApi`) and Outbound
//!   (`IdentityStore`, `VerificationProvider`, `NotificationSender`)
//! - **Application**: `AccountLifecycleService`
//! - **Adapters**: `InMemoryIdentityStore`, `StaticVerification`,
//!   `RecordingNotifier`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryIdentityStore;
pub use adapters::recording::{RecordingNotifier, StaticVerification};
pub use application::service::AccountLifecycleService;
pub use config::AccountConfig;
pub use domain::credential;
pub use domain::errors::{AccountError, IdentityStoreError, NotifyError};
pub use domain::identity::{AccountStatus, ApprovalOutcome, Identity, RegistrationRequest};
pub use ports::inbound::AccountLifecycleApi;
pub use ports::outbound::{IdentityStore, NotificationSender, TemplateKey, VerificationProvider};
