//! The Basic credential scheme: fixed prefix, base64 token, colon pair.

use base64::{Engine as _, engine::general_purpose};

use crate::error::AuthError;
use crate::traits::CredentialScheme;
use crate::types::Credentials;

/// RFC 7617 Basic authentication.
///
/// Extraction strips the exact scheme prefix from the header value;
/// decoding base64-decodes the token, requires valid UTF-8, and splits on
/// the first `:` so secrets may themselves contain the separator.
#[derive(Debug, Clone)]
pub struct BasicScheme {
    prefix: String,
}

impl BasicScheme {
    pub const DEFAULT_PREFIX: &'static str = "Basic ";

    pub fn new() -> Self {
        BasicScheme {
            prefix: Self::DEFAULT_PREFIX.to_string(),
        }
    }

    /// A Basic scheme with a non-standard prefix, for deployments that
    /// rewrite the scheme word at a proxy.
    pub fn with_prefix<T: Into<String>>(prefix: T) -> Result<Self, AuthError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(AuthError::InvalidSchemePrefix(
                "prefix must not be empty".to_string(),
            ));
        }
        Ok(BasicScheme { prefix })
    }
}

impl Default for BasicScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialScheme for BasicScheme {
    fn name(&self) -> &'static str {
        "Basic"
    }

    fn extract_token<'a>(&self, header: Option<&'a str>) -> Option<&'a str> {
        header?.strip_prefix(self.prefix.as_str())
    }

    fn decode(&self, token: &str) -> Option<Credentials> {
        let bytes = general_purpose::STANDARD.decode(token).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        // Split at the first separator only.
        let (identity, secret) = text.split_once(':')?;
        Some(Credentials::new(identity, secret))
    }
}
