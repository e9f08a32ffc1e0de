//! Principal records and their stored secret hashes.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An opaque, salted verifiable-secret attribute in PHC string format.
/// Never the raw secret. Redacts in `Debug` and is skipped on
/// serialization.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SecretHash(String);

impl SecretHash {
    pub fn new<T: Into<String>>(phc: T) -> Self {
        SecretHash(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for SecretHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "SecretHash(<redacted>)")
    }
}

/// An identity record resolvable from credentials. Owned by an external
/// store; this crate only reads principals and verifies secrets against
/// them, it never persists or mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Principal {
    identity: String,
    #[serde(skip)]
    secret_hash: SecretHash,
}

impl Principal {
    pub fn new<T: Into<String>>(identity: T, secret_hash: SecretHash) -> Self {
        Principal {
            identity: identity.into(),
            secret_hash,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn secret_hash(&self) -> &SecretHash {
        &self.secret_hash
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Principal::\"{}\"", self.identity)
    }
}
