//! Journal store trait definitions.

use async_trait::async_trait;
use entities::{JournalEntry, User};
use uuid::Uuid;

use crate::JournalStoreResult;

/// Filter options for listing journal entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Filter by owning user ID.
    pub user_id: Option<Uuid>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Trait for journal storage operations.
///
/// Journal entries are immutable once created, so the trait exposes no
/// update or delete operations for them. User records are provisioned by
/// the identity integration and only read here.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, user: User) -> JournalStoreResult<User>;

    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> JournalStoreResult<Option<User>>;

    /// Gets a user by email.
    async fn get_user_by_email(&self, email: &str) -> JournalStoreResult<Option<User>>;

    /// Creates a new journal entry.
    async fn create_entry(&self, entry: JournalEntry) -> JournalStoreResult<JournalEntry>;

    /// Lists journal entries with optional filters.
    ///
    /// Entries are ordered by creation time descending, with the entry ID
    /// (descending) as the tie-break. The returned count is the number of
    /// matches before `limit` and `offset` are applied.
    async fn list_entries(
        &self,
        filter: EntryFilter,
    ) -> JournalStoreResult<(Vec<JournalEntry>, u32)>;
}
