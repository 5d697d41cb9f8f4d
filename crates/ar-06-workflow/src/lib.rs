//! # AR-06: Workflow Coordination Subsystem
//!
//! The one place where roles are routed across subsystems. Registration,
//! approval, and rejection each fan out to the account, KYC, and card
//! subsystems according to a single decision table; no other crate branches
//! on role.
//!
//! Approval semantics: the account transition commits first and is
//! authoritative. Card issuance and notification delivery run afterwards
//! and report failures as warnings on the `ApprovalReport`, never by
//! unwinding the approval.
//!
//! ## Architecture
//!
//! - **Domain**: `RoleRoute` decision table, `ApprovalReport`
//! - **Ports**: Inbound (`WorkflowApi`)
//! - **Application**: `WorkflowCoordinator`

pub mod application;
pub mod domain;
pub mod ports;

pub use application::coordinator::WorkflowCoordinator;
pub use domain::errors::WorkflowError;
pub use domain::report::{ApprovalReport, WorkflowWarning};
pub use domain::route::RoleRoute;
pub use ports::inbound::WorkflowApi;
