//! Path-exemption matching.

use std::borrow::Cow;

use crate::types::ExemptionPattern;

/// Decides whether a request path is exempt from authentication.
///
/// Pure and allocation-light; O(number of exemptions × pattern length) per
/// call. The exemption set is read-only configuration, supplied once at
/// gate construction.
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    exemptions: Vec<ExemptionPattern>,
}

impl PathMatcher {
    pub fn new(exemptions: Vec<ExemptionPattern>) -> Self {
        PathMatcher { exemptions }
    }

    pub fn exemptions(&self) -> &[ExemptionPattern] {
        &self.exemptions
    }

    /// Whether `path` requires authentication.
    ///
    /// Fail-closed on both ambiguous inputs: an empty path requires
    /// authentication, and an empty exemption set requires authentication
    /// for every path. First matching exemption wins.
    pub fn requires_auth(&self, path: &str) -> bool {
        if path.is_empty() || self.exemptions.is_empty() {
            return true;
        }
        let path = normalize(path);
        !self.exemptions.iter().any(|pattern| pattern.matches(&path))
    }
}

/// Canonical trailing-slash form, applied to the path before comparison.
fn normalize(path: &str) -> Cow<'_, str> {
    if path.ends_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}/"))
    }
}
