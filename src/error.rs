use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum AuthError {
    #[error("invalid exemption pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid scheme prefix: {0}")]
    InvalidSchemePrefix(String),

    #[error("failed to hash secret: {0}")]
    HashError(String),

    #[error("principal store fault: {0}")]
    StoreFault(String),
}
