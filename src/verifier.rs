//! Secret hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AuthError;
use crate::traits::SecretVerifier;
use crate::types::SecretHash;

/// Argon2 hashing parameters.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Argon2Params {
    fn to_argon2(self) -> Result<Argon2<'static>, AuthError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AuthError::HashError(format!("create argon2 params: {e}")))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2Params {
    /// Argon2id RFC recommendations.
    fn default() -> Self {
        Self {
            memory_kib: 19456, // 19 MB
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Hash a secret into PHC string form with the given parameters, or the
/// defaults if `None`. Used when provisioning principal records and when
/// building test fixtures; the gate itself only ever verifies.
pub fn hash_secret_with_params(
    secret: &str,
    params: Option<Argon2Params>,
) -> Result<SecretHash, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = params.unwrap_or_default().to_argon2()?;

    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(format!("hash secret: {e}")))?;

    Ok(SecretHash::new(hash.to_string()))
}

/// Hash a secret with the default parameters.
pub fn hash_secret(secret: &str) -> Result<SecretHash, AuthError> {
    hash_secret_with_params(secret, None)
}

/// Constant-work-factor verification against a stored PHC hash.
///
/// Verification uses the parameters embedded in the hash itself. Any
/// failure, an unparseable stored hash included, degrades to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

impl SecretVerifier for Argon2Verifier {
    fn verify(&self, candidate: &str, stored: &SecretHash) -> bool {
        let Ok(parsed) = PasswordHash::new(stored.as_str()) else {
            return false;
        };

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
pub(crate) fn cheap_params() -> Argon2Params {
    // Keep test hashing fast; never use these outside tests.
    Argon2Params {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    }
}
