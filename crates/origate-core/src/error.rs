//! Shared error type across origate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed or rejected configuration.
    BadConfig,
    /// Request origin not permitted by policy.
    OriginRejected,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::OriginRejected => "ORIGIN_REJECTED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OrigateError>;

/// Unified error type used by core and gateway.
///
/// A deny decision is *not* an error inside the evaluator (see
/// [`crate::policy::OriginDecision`]); `OriginRejected` exists so the
/// request-handling boundary can translate a deny into an HTTP-level
/// failure with a stable code.
#[derive(Debug, Error)]
pub enum OrigateError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("invalid origin pattern: {0}")]
    InvalidPattern(String),
    #[error("origin rejected: {0}")]
    OriginRejected(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl OrigateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            OrigateError::BadConfig(_) => ClientCode::BadConfig,
            OrigateError::InvalidPattern(_) => ClientCode::BadConfig,
            OrigateError::OriginRejected(_) => ClientCode::OriginRejected,
            OrigateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            OrigateError::Internal(_) => ClientCode::Internal,
        }
    }
}
