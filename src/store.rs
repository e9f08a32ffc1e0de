//! In-memory principal store.

use std::collections::HashMap;

use crate::error::AuthError;
use crate::traits::PrincipalStore;
use crate::types::Principal;

/// A `HashMap`-backed store for tests, examples, and small deployments.
///
/// Lookup is exact-match on identity; candidates for one identity are
/// returned in insertion order, which is the store's natural order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrincipalStore {
    principals: HashMap<String, Vec<Principal>>,
}

impl MemoryPrincipalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, principal: Principal) {
        self.principals
            .entry(principal.identity().to_string())
            .or_default()
            .push(principal);
    }

    pub fn len(&self) -> usize {
        self.principals.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

impl PrincipalStore for MemoryPrincipalStore {
    fn find_by_identity(&self, identity: &str) -> Result<Vec<Principal>, AuthError> {
        Ok(self
            .principals
            .get(identity)
            .cloned()
            .unwrap_or_default())
    }
}
