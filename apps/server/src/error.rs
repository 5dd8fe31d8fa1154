//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Journal store error.
    #[error("Store error: {0}")]
    Store(#[from] journal_store::JournalStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // All authentication failures collapse to one body; the detailed
        // reason only goes to the logs.
        let (status, message) = match &self {
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::AuthenticationRequired => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            ServerError::Store(e) => {
                tracing::error!(error = %e, "Journal store call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
