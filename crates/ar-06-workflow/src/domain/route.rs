//! The role decision table.
//!
//! Every role-specific branch in the workflow lives here. Adding a role
//! means adding one row, not hunting call sites.

use shared_types::{HolderType, Role};

/// What a role gets downstream of approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRoute {
    /// Card issued at approval, if any.
    pub card: Option<HolderType>,
    /// Whether registration opens a KYC review record.
    pub requires_kyc: bool,
}

impl RoleRoute {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Farmer => Self {
                card: Some(HolderType::Farmer),
                requires_kyc: true,
            },
            Role::Employee => Self {
                card: Some(HolderType::Employee),
                requires_kyc: false,
            },
            Role::Fpo => Self {
                card: Some(HolderType::Organization),
                requires_kyc: false,
            },
            Role::Admin | Role::SuperAdmin => Self {
                card: None,
                requires_kyc: false,
            },
        }
    }
}
