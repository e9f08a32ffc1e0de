//! Credential-to-principal resolution.

use tracing::{debug, warn};

use crate::traits::{PrincipalStore, SecretVerifier};
use crate::types::Principal;

/// Looks up a principal by identity and verifies the secret.
///
/// Every failure class — store fault, no match, secret mismatch — is
/// indistinguishable to the caller: all collapse to `None`. A resolution
/// fault must never be mistaken for "authenticated".
#[derive(Debug, Clone)]
pub struct PrincipalResolver<S, V> {
    store: S,
    verifier: V,
}

impl<S: PrincipalStore, V: SecretVerifier> PrincipalResolver<S, V> {
    pub fn new(store: S, verifier: V) -> Self {
        PrincipalResolver { store, verifier }
    }

    /// Resolve `identity` to a verified principal, or nothing.
    ///
    /// Exactly one store read per call. The first candidate in the store's
    /// natural return order is the one verified. The raw secret is never
    /// logged or echoed.
    pub fn resolve(&self, identity: &str, secret: &str) -> Option<Principal> {
        let candidates = match self.store.find_by_identity(identity) {
            Ok(candidates) => candidates,
            Err(err) => {
                // Swallowed: a store fault reads as "no match", fail closed.
                warn!(event = "Request", phase = "Lookup", identity, error = %err);
                return None;
            }
        };

        let principal = candidates.into_iter().next()?;

        if !self.verifier.verify(secret, principal.secret_hash()) {
            debug!(
                event = "Request",
                phase = "Verify",
                identity,
                outcome = "mismatch"
            );
            return None;
        }

        Some(principal)
    }
}
