//! One-time credential material.
//!
//! Only the SHA-256 digest of a credential is ever stored; the plaintext
//! leaves this subsystem exactly once, inside the approval notification.

use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Generate a random one-time credential of the given length.
pub fn generate_one_time(length: usize) -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Hex-encoded SHA-256 digest of a plaintext credential.
pub fn digest(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-shape comparison of a plaintext against a stored digest.
pub fn matches(plain: &str, stored_digest: &str) -> bool {
    digest(plain) == stored_digest
}
