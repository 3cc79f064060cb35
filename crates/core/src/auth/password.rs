//! Salted password hashing
//!
//! Hashes are stored as `v1$<salt>$<digest>` with url-safe base64 parts.
//! The version prefix leaves room for migrating to a different scheme
//! without invalidating stored hashes.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Hash a password with a fresh random 16-byte salt
pub fn hash_password(password: &str) -> String {
    let mut salt = [0_u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();

    format!(
        "v1${}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(digest)
    )
}

/// Check a password against a stored hash.
///
/// Returns false for any malformed hash rather than erroring; a corrupt
/// stored hash must never let a login through.
pub fn verify_password(stored_hash: &str, password: &str) -> bool {
    let mut parts = stored_hash.split('$');
    let (Some("v1"), Some(encoded_salt), Some(encoded_digest), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let Ok(salt) = URL_SAFE_NO_PAD.decode(encoded_salt) else {
        return false;
    };
    let Ok(expected_digest) = URL_SAFE_NO_PAD.decode(encoded_digest) else {
        return false;
    };

    let mut hasher = Sha256::new();
    hasher.update(&salt);
    hasher.update(password.as_bytes());
    let actual_digest = hasher.finalize();
    expected_digest == actual_digest.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("verysecurepw");
        assert!(hash.starts_with("v1$"));
        assert!(verify_password(&hash, "verysecurepw"));
        assert!(!verify_password(&hash, "wrongpassword"));
    }

    #[test]
    fn test_salts_are_unique() {
        let first = hash_password("verysecurepw");
        let second = hash_password("verysecurepw");
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        for stored in ["", "v1$", "v2$abc$def", "not-a-hash", "v1$!!$!!"] {
            assert!(!verify_password(stored, "verysecurepw"));
        }
    }
}
