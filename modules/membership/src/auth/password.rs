//! Argon2id password hashing.

use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password with a fresh random salt.
pub fn hash(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow!("password hashing failed: {e}"))?;
    Ok(hashed.to_string())
}

/// Compare a candidate against a stored hash.
///
/// A mismatch is a normal outcome and returns `Ok(false)`; `Err` is reserved
/// for hashing-library failures (e.g. a malformed stored hash).
pub fn verify(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| anyhow!("malformed password hash: {e}"))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow!("password verification failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let h = hash("hunter2hunter2").unwrap();
        assert!(verify("hunter2hunter2", &h).unwrap());
    }

    #[test]
    fn mismatch_returns_false_not_error() {
        let h = hash("correct horse").unwrap();
        assert!(!verify("battery staple", &h).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn same_password_hashes_differently() {
        // fresh salt per call
        let a = hash("pw-pw-pw").unwrap();
        let b = hash("pw-pw-pw").unwrap();
        assert_ne!(a, b);
    }
}
