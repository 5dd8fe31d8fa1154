//! In-memory journal store implementation for testing.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::{JournalEntry, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{EntryFilter, JournalStore, JournalStoreError, JournalStoreResult};

/// In-memory journal store for testing and single-process use.
#[derive(Debug, Default)]
pub struct MemoryJournalStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    entries: Arc<RwLock<HashMap<Uuid, JournalEntry>>>,
}

impl MemoryJournalStore {
    /// Creates a new in-memory journal store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JournalStore for MemoryJournalStore {
    async fn create_user(&self, user: User) -> JournalStoreResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(JournalStoreError::already_exists("User", user.id.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> JournalStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> JournalStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_entry(&self, entry: JournalEntry) -> JournalStoreResult<JournalEntry> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.id) {
            return Err(JournalStoreError::already_exists(
                "JournalEntry",
                entry.id.to_string(),
            ));
        }
        entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list_entries(
        &self,
        filter: EntryFilter,
    ) -> JournalStoreResult<(Vec<JournalEntry>, u32)> {
        let entries = self.entries.read().await;
        let mut result: Vec<JournalEntry> = entries
            .values()
            .filter(|e| filter.user_id.is_none_or(|id| e.user_id == id))
            .cloned()
            .collect();

        // Newest first; entry ID breaks timestamp ties deterministically.
        result.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = result.len() as u32;

        if let Some(offset) = filter.offset {
            result = result.into_iter().skip(offset as usize).collect();
        }
        if let Some(limit) = filter.limit {
            result = result.into_iter().take(limit as usize).collect();
        }

        Ok((result, total))
    }
}
