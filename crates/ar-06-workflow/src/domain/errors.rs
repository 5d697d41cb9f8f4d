//! Workflow error type.
//!
//! Only failures of the authoritative path appear here. Side-effect
//! failures after the commit surface as `WorkflowWarning`s on the report.

use ar_03_account::AccountError;
use ar_04_kyc::KycError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Kyc(#[from] KycError),
}
