//! # AgriRegistry Test Suite
//!
//! Unified test crate for cross-subsystem choreography:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── issuance_flow.rs   # register → approve → card scenarios
//!     └── review_flow.rs     # KYC review and card lifecycle scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ar-tests
//! cargo test -p ar-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary. `RUST_LOG` wins; the
/// default keeps subsystem logs at info.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
