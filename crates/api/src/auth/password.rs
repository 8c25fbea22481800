//! Legacy password digests.
//!
//! Stored credentials are the lowercase hex SHA-256 digest of the UTF-8
//! password. The format is fixed by existing user records and cannot change
//! without a migration of every account.

use sha2::{Digest, Sha256};

/// Compute the stored digest for a plaintext password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a plaintext password against a stored digest.
///
/// Hex case in the stored value is ignored.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored_hash.trim())
}
