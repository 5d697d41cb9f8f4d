//! The `CredentialArtifact` entity and its status lifecycle.

use serde::{Deserialize, Serialize};
use shared_types::{HolderId, HolderType, Timestamp};
use std::collections::HashMap;
use std::fmt;

/// Lifecycle state of an issued card.
///
/// `Revoked` is terminal. `Expired` cards can still be re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    Active,
    Expired,
    Revoked,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Revoked => write!(f, "REVOKED"),
        }
    }
}

/// Ledger entry for a minted identifier. Append-only: once a value is
/// recorded it is never recycled, even if the card it backs is revoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedIdentifier {
    pub value: String,
    pub owner_type: HolderType,
    pub owner_id: HolderId,
    pub series_key: String,
    pub reserved_sequence: u64,
}

/// References to the rendered artifact files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRefs {
    pub pdf: String,
    pub png: String,
}

/// An issued identity card.
///
/// `card_id` is the composite identifier (e.g. `FRMTNIN0007`) and never
/// changes after issuance. `artifact_refs` is `None` while rendering is
/// pending or has failed; the record itself is authoritative either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialArtifact {
    pub card_id: String,
    pub holder_type: HolderType,
    pub holder_id: HolderId,
    pub holder_name: String,
    pub status: CardStatus,
    pub generated_at: Timestamp,
    pub expires_at: Timestamp,
    pub artifact_refs: Option<ArtifactRefs>,
}

impl CredentialArtifact {
    pub fn is_active(&self) -> bool {
        self.status == CardStatus::Active
    }

    /// Whether a re-render is permitted. Revoked cards stay revoked.
    pub fn can_regenerate(&self) -> bool {
        matches!(self.status, CardStatus::Active | CardStatus::Expired)
    }
}

/// Aggregate card counts, reported by the issuance dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStatistics {
    pub total: u64,
    pub active: u64,
    pub expired: u64,
    pub revoked: u64,
    /// Counts keyed by holder-type series key ("FARMER", "EMPLOYEE", ...).
    pub by_holder_type: HashMap<String, u64>,
}

impl CardStatistics {
    pub fn record(&mut self, card: &CredentialArtifact) {
        self.total += 1;
        match card.status {
            CardStatus::Active => self.active += 1,
            CardStatus::Expired => self.expired += 1,
            CardStatus::Revoked => self.revoked += 1,
        }
        *self
            .by_holder_type
            .entry(card.holder_type.series_key().to_string())
            .or_insert(0) += 1;
    }
}
