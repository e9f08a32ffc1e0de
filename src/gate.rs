//! The end-to-end authorization decision for one request.

use tracing::debug;

use crate::matcher::PathMatcher;
use crate::resolver::PrincipalResolver;
use crate::scheme::BasicScheme;
use crate::traits::{CredentialScheme, PrincipalStore, SecretVerifier};
use crate::types::{AuthDecision, ExemptionPattern};

/// Orchestrates the pipeline: exemption check, token extraction, decoding,
/// and principal resolution, each stage short-circuiting to its terminal
/// decision.
///
/// The gate is stateless between requests: exemptions and the scheme are
/// read-only configuration fixed at construction, decisions are recomputed
/// per request and never cached, and concurrent calls need no
/// synchronization. There are no retries: any stage failure is final for
/// that request.
pub struct AuthGate<S, V> {
    matcher: PathMatcher,
    scheme: Box<dyn CredentialScheme + Send + Sync>,
    resolver: PrincipalResolver<S, V>,
}

impl<S: PrincipalStore, V: SecretVerifier> AuthGate<S, V> {
    pub fn new(
        exemptions: Vec<ExemptionPattern>,
        scheme: Box<dyn CredentialScheme + Send + Sync>,
        resolver: PrincipalResolver<S, V>,
    ) -> Self {
        AuthGate {
            matcher: PathMatcher::new(exemptions),
            scheme,
            resolver,
        }
    }

    /// A gate configured with the standard Basic scheme.
    pub fn basic(exemptions: Vec<ExemptionPattern>, resolver: PrincipalResolver<S, V>) -> Self {
        Self::new(exemptions, Box::new(BasicScheme::new()), resolver)
    }

    /// Decide the outcome for one request.
    ///
    /// `authorization` is the raw authorization header value, if the
    /// request carried one. Mapping the decision to wire-level status codes
    /// is the boundary's job.
    ///
    /// Failure shape drives the mapping: a credential the scheme never
    /// recognized is `Unauthenticated`, while a recognized-but-unusable or
    /// unresolvable credential is the stronger negative `Forbidden`.
    pub fn decide(&self, path: &str, authorization: Option<&str>) -> AuthDecision {
        if !self.matcher.requires_auth(path) {
            debug!(
                event = "Request",
                phase = "Exemption",
                path,
                scheme = self.scheme.name()
            );
            return AuthDecision::Exempt;
        }

        let Some(token) = self.scheme.extract_token(authorization) else {
            debug!(
                event = "Request",
                phase = "Extract",
                path,
                outcome = "no credential"
            );
            return AuthDecision::Unauthenticated;
        };

        let Some(credentials) = self.scheme.decode(token) else {
            debug!(
                event = "Request",
                phase = "Decode",
                path,
                outcome = "malformed"
            );
            return AuthDecision::Forbidden;
        };

        let Some(principal) = self
            .resolver
            .resolve(credentials.identity(), credentials.secret())
        else {
            debug!(
                event = "Request",
                phase = "Resolve",
                path,
                outcome = "no principal"
            );
            return AuthDecision::Forbidden;
        };

        let decision = AuthDecision::Authenticated(principal);
        debug!(
            event = "Request",
            phase = "Decision",
            path,
            decision = decision.as_ref()
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::store::MemoryPrincipalStore;
    use crate::types::Principal;
    use crate::verifier::{Argon2Verifier, cheap_params, hash_secret_with_params};
    use base64::{Engine as _, engine::general_purpose};
    use yare::parameterized;

    const EXEMPTIONS: &[&str] = &[
        "/api/v1/status/",
        "/api/v1/unauthorized/",
        "/api/v1/public/*",
    ];

    fn exemptions() -> Vec<ExemptionPattern> {
        EXEMPTIONS.iter().map(|p| p.parse().unwrap()).collect()
    }

    fn gate_with_user(
        identity: &str,
        secret: &str,
    ) -> AuthGate<MemoryPrincipalStore, Argon2Verifier> {
        let mut store = MemoryPrincipalStore::new();
        let hash = hash_secret_with_params(secret, Some(cheap_params())).unwrap();
        store.insert(Principal::new(identity, hash));
        AuthGate::basic(exemptions(), PrincipalResolver::new(store, Argon2Verifier))
    }

    fn basic_header(identity: &str, secret: &str) -> String {
        let token = general_purpose::STANDARD.encode(format!("{identity}:{secret}"));
        format!("Basic {token}")
    }

    #[parameterized(
        exact_without_trailing_slash = { "/api/v1/status" },
        exact_with_trailing_slash = { "/api/v1/status/" },
        wildcard_nested = { "/api/v1/public/widgets/5" },
    )]
    fn exempt_paths_bypass_the_gate(path: &str) {
        let gate = gate_with_user("foo@bar.com", "secret");
        assert_eq!(gate.decide(path, None), AuthDecision::Exempt);
    }

    #[test]
    fn exemption_wins_even_with_bad_credentials() {
        let gate = gate_with_user("foo@bar.com", "secret");
        let decision = gate.decide("/api/v1/status", Some("Basic !!!garbage!!!"));
        assert_eq!(decision, AuthDecision::Exempt);
    }

    #[test]
    fn non_exempt_path_without_header_is_unauthenticated() {
        let gate = gate_with_user("foo@bar.com", "secret");
        let decision = gate.decide("/api/v1/private/widgets/5", None);
        assert_eq!(decision, AuthDecision::Unauthenticated);
    }

    #[parameterized(
        bearer = { "Bearer Zm9vQGJhci5jb206c2VjcmV0" },
        lowercase = { "basic Zm9vQGJhci5jb206c2VjcmV0" },
        bare_scheme = { "Basic" },
    )]
    fn unrecognized_scheme_is_unauthenticated(header: &str) {
        let gate = gate_with_user("foo@bar.com", "secret");
        let decision = gate.decide("/api/v1/users", Some(header));
        assert_eq!(decision, AuthDecision::Unauthenticated);
    }

    #[test]
    fn valid_credentials_authenticate_the_principal() {
        let gate = gate_with_user("foo@bar.com", "secret");
        let decision = gate.decide("/api/v1/users", Some("Basic Zm9vQGJhci5jb206c2VjcmV0"));

        let principal = decision.principal().expect("expected Authenticated");
        assert_eq!(principal.identity(), "foo@bar.com");
    }

    #[test]
    fn wrong_secret_is_forbidden() {
        let gate = gate_with_user("foo@bar.com", "not-that-secret");
        let decision = gate.decide("/api/v1/users", Some("Basic Zm9vQGJhci5jb206c2VjcmV0"));
        assert_eq!(decision, AuthDecision::Forbidden);
    }

    #[parameterized(
        garbage_token = { "Basic !!!garbage!!!" },
        missing_separator = { "Basic bm8tc2VwYXJhdG9y" },
    )]
    fn malformed_present_credential_is_forbidden(header: &str) {
        let gate = gate_with_user("foo@bar.com", "secret");
        let decision = gate.decide("/api/v1/users", Some(header));
        assert_eq!(decision, AuthDecision::Forbidden);
    }

    #[test]
    fn unknown_identity_is_forbidden() {
        let gate = gate_with_user("someone-else@bar.com", "secret");
        let decision = gate.decide("/api/v1/users", Some(&basic_header("foo@bar.com", "secret")));
        assert_eq!(decision, AuthDecision::Forbidden);
    }

    #[test]
    fn secret_containing_separators_authenticates() {
        let gate = gate_with_user("foo@bar.com", "se:cr:et");
        let decision = gate.decide("/api/v1/users", Some(&basic_header("foo@bar.com", "se:cr:et")));
        assert!(decision.principal().is_some());
    }

    #[test]
    fn store_fault_is_forbidden() {
        struct FailingStore;

        impl PrincipalStore for FailingStore {
            fn find_by_identity(&self, _identity: &str) -> Result<Vec<Principal>, AuthError> {
                Err(AuthError::StoreFault("connection refused".to_string()))
            }
        }

        let gate = AuthGate::basic(
            exemptions(),
            PrincipalResolver::new(FailingStore, Argon2Verifier),
        );
        let decision = gate.decide("/api/v1/users", Some(&basic_header("foo@bar.com", "secret")));
        assert_eq!(decision, AuthDecision::Forbidden);
    }

    #[test]
    fn empty_exemption_list_gates_every_path() {
        let mut store = MemoryPrincipalStore::new();
        let hash = hash_secret_with_params("secret", Some(cheap_params())).unwrap();
        store.insert(Principal::new("foo@bar.com", hash));
        let gate = AuthGate::basic(Vec::new(), PrincipalResolver::new(store, Argon2Verifier));

        assert_eq!(gate.decide("/api/v1/status", None), AuthDecision::Unauthenticated);
        assert_eq!(gate.decide("", None), AuthDecision::Unauthenticated);
    }

    #[test]
    fn custom_scheme_prefix_is_honored() {
        let mut store = MemoryPrincipalStore::new();
        let hash = hash_secret_with_params("secret", Some(cheap_params())).unwrap();
        store.insert(Principal::new("foo@bar.com", hash));
        let gate = AuthGate::new(
            exemptions(),
            Box::new(BasicScheme::with_prefix("X-Basic ").unwrap()),
            PrincipalResolver::new(store, Argon2Verifier),
        );

        let token = general_purpose::STANDARD.encode("foo@bar.com:secret");
        let accepted = gate.decide("/api/v1/users", Some(&format!("X-Basic {token}")));
        assert!(accepted.principal().is_some());

        let rejected = gate.decide("/api/v1/users", Some(&format!("Basic {token}")));
        assert_eq!(rejected, AuthDecision::Unauthenticated);
    }

    #[test]
    fn concurrent_decisions_are_independent() {
        use std::sync::Arc;
        use std::thread;

        let gate = Arc::new(gate_with_user("foo@bar.com", "secret"));
        let mut handles = vec![];

        for i in 0..4 {
            let gate = Arc::clone(&gate);
            let handle = thread::spawn(move || {
                for _ in 0..25 {
                    let decision = if i % 2 == 0 {
                        gate.decide("/api/v1/status", None)
                    } else {
                        gate.decide("/api/v1/users", Some("Basic Zm9vQGJhci5jb206c2VjcmV0"))
                    };
                    match decision {
                        AuthDecision::Exempt => assert_eq!(i % 2, 0),
                        AuthDecision::Authenticated(ref principal) => {
                            assert_eq!(principal.identity(), "foo@bar.com");
                        }
                        other => panic!("unexpected decision: {other}"),
                    }
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
