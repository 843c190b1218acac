//! Argon2 password hashing with a fresh random salt per record.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

pub fn hash(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// One-way comparison against a stored hash; the hash is never reversed.
pub fn matches(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "secret1";
        let hashed = hash(password).expect("hashing should succeed");
        assert_ne!(hashed, password);
        assert!(matches(password, &hashed).expect("verify should succeed"));
    }

    #[test]
    fn rejects_wrong_password() {
        let hashed = hash("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!matches("wrong-password", &hashed).expect("verify should not error"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash("secret1").expect("hash a");
        let b = hash("secret1").expect("hash b");
        assert_ne!(a, b);
    }

    #[test]
    fn errors_on_malformed_hash() {
        let err = matches("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
