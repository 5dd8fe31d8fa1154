//! Journal entry definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journal entry owned by one user.
///
/// Entries are immutable once created; there is no update or delete path,
/// so the struct carries only a creation timestamp. The JSON form uses
/// camelCase field names, which is the surface the web client consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user ID.
    pub user_id: Uuid,
    /// Entry title.
    pub title: String,
    /// Entry body text.
    pub content: String,
    /// When this entry was created.
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Creates a new journal entry for the given user.
    pub fn new(user_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
