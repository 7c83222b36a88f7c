//! Error types for sl-auth.

use thiserror::Error;

/// Errors raised while decorating request options with credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The strategy does not provide an authenticate payload.
    #[error("authentication strategy '{0}' is not implemented")]
    NotImplemented(&'static str),

    /// Request options have no `headers` entry to populate.
    #[error("request options are missing the 'headers' mapping")]
    MissingHeaders,

    /// `headers` exists but is not a mapping.
    #[error("request options 'headers' is not a mapping")]
    InvalidHeaders,

    /// Request options root is not a mapping.
    #[error("request options must be a mapping")]
    InvalidOptions,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sl-auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
