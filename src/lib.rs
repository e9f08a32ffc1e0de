// src/lib.rs
pub use error::AuthError;
pub use gate::AuthGate;
pub use matcher::PathMatcher;
pub use resolver::PrincipalResolver;
pub use scheme::BasicScheme;
pub use store::MemoryPrincipalStore;
pub use traits::{CredentialScheme, PrincipalStore, SecretVerifier};
pub use types::{AuthDecision, Credentials, ExemptionPattern, Principal, SecretHash};
pub use verifier::{Argon2Params, Argon2Verifier, hash_secret, hash_secret_with_params};

mod error;
mod gate;
mod matcher;
mod resolver;
mod scheme;
mod store;
mod traits;
mod types;
mod verifier;
