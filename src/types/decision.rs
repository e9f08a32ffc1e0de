//! Terminal outcomes of the authorization pipeline.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use utoipa::ToSchema;

use super::principal::Principal;

/// The decision for one request. Never persisted; recomputed per request.
///
/// The boundary maps `Unauthenticated` to a 401-class response and
/// `Forbidden` to a 403-class response, both with generic bodies. Which
/// stage failed is deliberately not distinguishable from the value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, AsRefStr, PartialEq, Eq, Hash)]
pub enum AuthDecision {
    /// The path is exempt; the request proceeds unauthenticated by design.
    Exempt,
    /// No credential recognized by the configured scheme was presented.
    Unauthenticated,
    /// A credential was presented but could not be decoded or resolved.
    Forbidden,
    /// Credentials resolved to this principal and the secret verified.
    Authenticated(Principal),
}

impl AuthDecision {
    /// The resolved principal, when the decision carries one.
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            AuthDecision::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }
}

impl Display for AuthDecision {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuthDecision::Authenticated(principal) => write!(f, "Authenticated({principal})"),
            other => write!(f, "{}", other.as_ref()),
        }
    }
}
