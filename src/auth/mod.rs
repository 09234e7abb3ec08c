//! Password hashing contract and its argon2 implementation

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordVerifier, SaltString};
use argon2::password_hash::PasswordHasher as _;
use argon2::Argon2;

use crate::core::error::{DomainError, DomainResult};

/// One-way, internally-salted password digest contract.
///
/// The user service depends on this seam; tests can swap in a cheap fake.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into an opaque digest
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored digest
    fn verify(&self, plaintext: &str, digest: &str) -> DomainResult<bool>;
}

/// Argon2id implementation with a per-hash random salt
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::Internal(format!("password hashing failed: {}", e)))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| DomainError::Internal(format!("stored digest is malformed: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}
