//! Decoded identity/secret pairs.

use std::fmt::{Debug, Formatter, Result as FmtResult};

/// The (identity, secret) pair produced by decoding a credential token.
///
/// Deliberately carries no serde derives and a redacting `Debug`: the raw
/// secret must never be echoed, logged, or serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identity: String,
    secret: String,
}

impl Credentials {
    pub fn new<I: Into<String>, S: Into<String>>(identity: I, secret: S) -> Self {
        Credentials {
            identity: identity.into(),
            secret: secret.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .finish()
    }
}
