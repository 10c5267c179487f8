use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures are split so callers can tell an expired token from a
/// forged or malformed one without inspecting messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Failed to decode token: {0}")]
    Other(String),
}
