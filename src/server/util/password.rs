//! Salted password hashing.
//!
//! Passwords are stored as hex-encoded SHA-256 digests of `salt || password`
//! with a random per-user salt.

use rand::{distr::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Hashes a password with a freshly generated random salt.
///
/// # Returns
/// - `(hash, salt)` - Hex digest and the salt that produced it
pub fn hash_password(password: &str) -> (String, String) {
    let salt: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    (hash_with_salt(password, &salt), salt)
}

/// Hashes a password with a known salt.
pub fn hash_with_salt(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Checks a password attempt against a stored hash and salt.
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_with_salt(password, salt) == expected_hash
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verifies_correct_password() {
        let (hash, salt) = hash_password("hunter2");
        assert!(verify_password("hunter2", &salt, &hash));
    }

    #[test]
    fn rejects_wrong_password() {
        let (hash, salt) = hash_password("hunter2");
        assert!(!verify_password("hunter3", &salt, &hash));
    }

    #[test]
    fn same_password_different_salts_differ() {
        let (hash_a, salt_a) = hash_password("hunter2");
        let (hash_b, salt_b) = hash_password("hunter2");
        assert_ne!(salt_a, salt_b);
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn hash_is_hex_encoded_sha256() {
        let hash = hash_with_salt("password", "salt");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
