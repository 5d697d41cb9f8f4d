//! Configuration for the number series subsystem.

use serde::{Deserialize, Serialize};

/// Allocator tuning knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Upper bound on optimistic retry attempts per reservation.
    /// Exceeding it surfaces `SequenceError::Contention` to the caller.
    pub max_reserve_attempts: u32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_reserve_attempts: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(AllocatorConfig::default().max_reserve_attempts, 32);
    }
}
