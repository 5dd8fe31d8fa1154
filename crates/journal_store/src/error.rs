//! Journal store error types.

use thiserror::Error;

/// Errors that can occur during journal store operations.
///
/// Absent rows are not errors here: lookups return `Option` and the HTTP
/// layer decides what a miss means.
#[derive(Debug, Error)]
pub enum JournalStoreError {
    /// Duplicate entity.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl JournalStoreError {
    /// Creates an already exists error.
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }
}

/// Result type for journal store operations.
pub type JournalStoreResult<T> = Result<T, JournalStoreError>;
