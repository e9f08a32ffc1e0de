use crate::error::AuthError;
use crate::types::{Credentials, Principal, SecretHash};

/// A credential-encoding convention, e.g. Basic. The gate holds whichever
/// scheme variant is configured; adding a scheme means adding an
/// implementation, not a subclass.
pub trait CredentialScheme {
    /// Scheme name, used only in log fields.
    fn name(&self) -> &'static str;

    /// Pull the raw token out of an authorization header value.
    ///
    /// Returns `None` when the header is absent or does not start with the
    /// exact scheme prefix (case-sensitive, trailing space included). The
    /// remainder is returned untouched: not trimmed, not re-encoded.
    fn extract_token<'a>(&self, header: Option<&'a str>) -> Option<&'a str>;

    /// Decode a raw token into an identity/secret pair.
    ///
    /// Every malformed-input class collapses to `None`; decoding never
    /// raises a fault past this boundary.
    fn decode(&self, token: &str) -> Option<Credentials>;
}

/// Read-only principal lookup by exact identity.
pub trait PrincipalStore {
    /// May return zero, one, or more matches, in the store's natural order.
    /// A fault is an `Err` here; the resolver treats it as zero matches.
    fn find_by_identity(&self, identity: &str) -> Result<Vec<Principal>, AuthError>;
}

/// One-way, salted comparison of a candidate secret against a stored hash.
/// Never reversible; implementations must not log their inputs.
pub trait SecretVerifier {
    fn verify(&self, candidate: &str, stored: &SecretHash) -> bool;
}
