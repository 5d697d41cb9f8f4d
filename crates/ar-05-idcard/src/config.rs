//! Issuer configuration.

use serde::{Deserialize, Serialize};

/// Five years, in seconds.
const DEFAULT_VALIDITY_SECS: u64 = 5 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuerConfig {
    /// How long a freshly issued card stays valid.
    pub validity_secs: u64,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            validity_secs: DEFAULT_VALIDITY_SECS,
        }
    }
}
