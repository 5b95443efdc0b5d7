//! Salted password digests for the reference user store
//!
//! Stored form is `salt$digest`, both hex-encoded, digest = SHA-256(salt ||
//! password). This is the reference-store credential scheme, not a hardened
//! KDF; a production deployment swaps the user directory together with its
//! hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hashes a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
    let salt = hex::encode(Uuid::new_v4().as_bytes());
    let digest = digest_with_salt(&salt, password);
    format!("{salt}${digest}")
}

/// Checks a candidate password against a stored `salt$digest` value
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_with_salt(salt, candidate) == digest,
        None => false,
    }
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let stored = hash_password("hunter42");
        assert!(verify_password(&stored, "hunter42"));
        assert!(!verify_password(&stored, "hunter43"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = hash_password("hunter42");
        let b = hash_password("hunter42");
        assert_ne!(a, b);
        assert!(verify_password(&a, "hunter42"));
        assert!(verify_password(&b, "hunter42"));
    }

    #[test]
    fn test_malformed_stored_value_never_verifies() {
        assert!(!verify_password("no-separator", "anything"));
        assert!(!verify_password("", ""));
    }
}
