//! Path rules that bypass authentication.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AuthError;

/// The wildcard marker. Only meaningful as the final character of a pattern,
/// where it denotes "this prefix and everything after it."
pub const WILDCARD: char = '*';

/// A single exemption rule: an exact path or a prefix-wildcard pattern.
///
/// Patterns are validated at construction, so a configured gate never holds
/// a malformed one. Ordering among patterns is irrelevant; they form one
/// logical exemption set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ExemptionPattern(String);

impl ExemptionPattern {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this pattern is a prefix-wildcard rule.
    pub fn is_wildcard(&self) -> bool {
        self.0.ends_with(WILDCARD)
    }

    /// Match against a path that already carries a trailing `/`.
    ///
    /// Wildcard patterns match by prefix after stripping the marker. Exact
    /// patterns compare in canonical trailing-slash form on both sides.
    pub(crate) fn matches(&self, normalized_path: &str) -> bool {
        match self.0.strip_suffix(WILDCARD) {
            Some(prefix) => normalized_path.starts_with(prefix),
            None if self.0.ends_with('/') => normalized_path == self.0,
            None => normalized_path.strip_suffix('/') == Some(self.0.as_str()),
        }
    }
}

impl Display for ExemptionPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExemptionPattern {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AuthError::InvalidPattern(
                "pattern must not be empty".to_string(),
            ));
        }
        if !s.starts_with('/') {
            return Err(AuthError::InvalidPattern(format!(
                "expected an absolute path, got '{s}'"
            )));
        }
        if let Some(idx) = s.find(WILDCARD) {
            if idx != s.len() - 1 {
                return Err(AuthError::InvalidPattern(format!(
                    "'{WILDCARD}' is only valid as the final character, got '{s}'"
                )));
            }
        }
        Ok(ExemptionPattern(s.to_string()))
    }
}

impl TryFrom<String> for ExemptionPattern {
    type Error = AuthError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ExemptionPattern> for String {
    fn from(pattern: ExemptionPattern) -> Self {
        pattern.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        exact = { "/api/v1/status" },
        exact_trailing_slash = { "/api/v1/status/" },
        wildcard = { "/api/v1/public/*" },
        root = { "/" },
        match_all = { "/*" },
    )]
    fn valid_patterns_parse(input: &str) {
        let pattern: ExemptionPattern = input.parse().unwrap();
        assert_eq!(pattern.as_str(), input);
    }

    #[parameterized(
        empty = { "" },
        relative = { "api/v1/status" },
        bare_wildcard = { "*" },
        interior_wildcard = { "/api/*/status" },
    )]
    fn invalid_patterns_are_rejected(input: &str) {
        let result = input.parse::<ExemptionPattern>();
        assert!(matches!(result, Err(AuthError::InvalidPattern(_))));
    }

    #[parameterized(
        plain = { "/api/v1/status", false },
        wildcard = { "/api/v1/public/*", true },
    )]
    fn wildcard_detection(input: &str, expected: bool) {
        let pattern: ExemptionPattern = input.parse().unwrap();
        assert_eq!(pattern.is_wildcard(), expected);
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<ExemptionPattern, _> = serde_json::from_str(r#""/api/v1/status/""#);
        assert!(ok.is_ok());

        let bad: Result<ExemptionPattern, _> = serde_json::from_str(r#""no-leading-slash""#);
        assert!(bad.is_err());
    }

    #[test]
    fn serialization_round_trip() {
        let pattern: ExemptionPattern = "/api/v1/public/*".parse().unwrap();
        let serialized = serde_json::to_value(&pattern).unwrap();
        assert_eq!(serialized, serde_json::json!("/api/v1/public/*"));
        let deserialized: ExemptionPattern = serde_json::from_value(serialized).unwrap();
        assert_eq!(pattern, deserialized);
    }
}
