//! # Core Domain Entities
//!
//! Identity, holder, and location types shared by every subsystem.
//!
//! ## Clusters
//!
//! - **Identity**: `IdentityId`, `Contact`, `Role`
//! - **Holders**: `HolderId`, `HolderType`
//! - **Context**: `LocationContext`, `KycStatus`

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Unique identifier for an applicant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a card-holding subject record (farmer profile,
/// employee profile, organization, or organization member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolderId(pub Uuid);

impl HolderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HolderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact details for an applicant. Email is mandatory and globally unique;
/// phone is optional but unique when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
}

impl Contact {
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: None,
        }
    }

    pub fn with_phone(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: Some(phone.into()),
        }
    }
}

/// Role assigned to an identity at approval time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Farmer,
    Employee,
    /// Farmer producer organization account.
    Fpo,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Case-insensitive parse, mirroring how role names arrive from
    /// administrative callers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "FARMER" => Some(Self::Farmer),
            "EMPLOYEE" => Some(Self::Employee),
            "FPO" => Some(Self::Fpo),
            "ADMIN" => Some(Self::Admin),
            "SUPER_ADMIN" | "SUPERADMIN" => Some(Self::SuperAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Farmer => write!(f, "FARMER"),
            Self::Employee => write!(f, "EMPLOYEE"),
            Self::Fpo => write!(f, "FPO"),
            Self::Admin => write!(f, "ADMIN"),
            Self::SuperAdmin => write!(f, "SUPER_ADMIN"),
        }
    }
}

// =============================================================================
// CLUSTER B: HOLDERS
// =============================================================================

/// Kind of entity a credential artifact is issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolderType {
    Farmer,
    Employee,
    Organization,
    Member,
}

impl HolderType {
    /// Key of the number series this holder type draws card sequences from.
    pub fn series_key(&self) -> &'static str {
        match self {
            Self::Farmer => "FARMER",
            Self::Employee => "EMPLOYEE",
            Self::Organization => "FPO",
            Self::Member => "MEMBER",
        }
    }

    /// Three-letter tag used as the leading segment of composite card ids.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Farmer => "FRM",
            Self::Employee => "EMP",
            Self::Organization => "FPO",
            Self::Member => "MBR",
        }
    }
}

impl fmt::Display for HolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.series_key())
    }
}

// =============================================================================
// CLUSTER C: CONTEXT
// =============================================================================

/// Location names carried into composite identifiers. These are display
/// names; the short codes come from the location reference lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    pub state: String,
    pub country: String,
}

impl LocationContext {
    pub fn new(state: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            country: country.into(),
        }
    }
}

/// Review state of the KYC sub-workflow attached to a subject record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
    ReferredBack,
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::ReferredBack => write!(f, "REFER_BACK"),
        }
    }
}
