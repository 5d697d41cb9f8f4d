//! # AR-05: Credential Artifact Subsystem
//!
//! Issues physical-credential artifacts (identity cards) against approved
//! holder records. Card ids are composite codes minted from the number
//! series allocator and the location reference table; once assigned, a card
//! id is immutable and never recycled.
//!
//! Issuance persists the artifact record before rendering, so a rendering
//! outage produces a retryable card (regenerate) rather than a lost one.
//!
//! ## Architecture
//!
//! - **Domain**: `CredentialArtifact`, `CardStatus`, `ArtifactRefs`
//! - **Ports**: Inbound (`CredentialArtifactApi`), Outbound (`CardStore`,
//!   `RenderingService`)
//! - **Application**: `CredentialIssuerService`
//! - **Adapters**: `InMemoryCardStore`, `StubRenderer`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::memory::InMemoryCardStore;
pub use adapters::rendering::StubRenderer;
pub use application::service::CredentialIssuerService;
pub use config::IssuerConfig;
pub use domain::card::{
    ArtifactRefs, CardStatistics, CardStatus, CredentialArtifact, IssuedIdentifier,
};
pub use domain::errors::{CardStoreError, IssueError, RenderError};
pub use ports::inbound::CredentialArtifactApi;
pub use ports::outbound::{CardStore, RenderingService};
