//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while issuing or resolving sessions.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Session token failed validation.
    #[error("Session validation failed: {0}")]
    Validation(String),

    /// Session token could not be signed.
    #[error("Session signing failed: {0}")]
    Signing(String),

    /// Session expired.
    #[error("Session expired")]
    Expired,

    /// Invalid session token.
    #[error("Invalid session token")]
    InvalidToken,
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidToken => AuthError::InvalidToken,
            _ => AuthError::Validation(e.to_string()),
        }
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
