//! Configuration for the account lifecycle subsystem.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Length of generated one-time credentials.
    pub one_time_credential_length: usize,
    /// Minimum accepted length for caller-chosen replacement credentials.
    pub min_credential_length: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            one_time_credential_length: 12,
            min_credential_length: 8,
        }
    }
}
