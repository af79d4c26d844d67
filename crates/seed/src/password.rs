//! Argon2id hashing for seeded account passwords.
//!
//! Hashes use a random salt from [`OsRng`] and the PHC string format, so
//! the algorithm parameters and salt travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;

use crate::error::SeedError;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeedError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}
