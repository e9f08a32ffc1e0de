//! Data model types for the authorization pipeline.
//!
//! Canonical forms:
//! - Exemption pattern: an absolute path (`/api/v1/status`) or a prefix
//!   ending in the wildcard marker (`/api/v1/public/*`)
//! - Principal: an identity string plus an opaque salted secret hash
//! - Decision: one of Exempt, Unauthenticated, Forbidden, Authenticated

mod credentials;
mod decision;
mod pattern;
mod principal;

pub use credentials::Credentials;
pub use decision::AuthDecision;
pub use pattern::{ExemptionPattern, WILDCARD};
pub use principal::{Principal, SecretHash};
