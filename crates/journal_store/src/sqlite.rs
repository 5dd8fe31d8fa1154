//! SQLite-backed journal store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::{JournalEntry, User};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite};
use uuid::Uuid;

use crate::{EntryFilter, JournalStore, JournalStoreResult};

/// SQL schema definition
const SCHEMA_SQL: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY NOT NULL,
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Journal entries table
CREATE TABLE IF NOT EXISTS journal_entries (
    id TEXT PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Indexes for performance
CREATE INDEX IF NOT EXISTS idx_journal_entries_user ON journal_entries(user_id);
CREATE INDEX IF NOT EXISTS idx_journal_entries_user_created ON journal_entries(user_id, created_at DESC);
"#;

/// Parses an RFC 3339 timestamp stored as text.
fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Database row for User.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: Option<String>,
    created_at: String,
    updated_at: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id.parse().unwrap_or_default(),
            email: row.email,
            name: row.name,
            created_at: parse_timestamp(&row.created_at),
            updated_at: parse_timestamp(&row.updated_at),
        }
    }
}

/// Database row for JournalEntry.
#[derive(Debug, FromRow)]
struct JournalEntryRow {
    id: String,
    user_id: String,
    title: String,
    content: String,
    created_at: String,
}

impl From<JournalEntryRow> for JournalEntry {
    fn from(row: JournalEntryRow) -> Self {
        JournalEntry {
            id: row.id.parse().unwrap_or_default(),
            user_id: row.user_id.parse().unwrap_or_default(),
            title: row.title,
            content: row.content,
            created_at: parse_timestamp(&row.created_at),
        }
    }
}

/// SQLite-backed journal store.
///
/// Timestamps are stored as RFC 3339 text, which keeps the stored order
/// identical to the chronological order for UTC values.
pub struct SqliteJournalStore {
    pool: Pool<Sqlite>,
}

impl SqliteJournalStore {
    /// Connects to the given database URL and applies the schema.
    pub async fn connect(database_url: &str) -> JournalStoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(SCHEMA_SQL).execute(&pool).await?;
        tracing::debug!("Journal store schema applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl JournalStore for SqliteJournalStore {
    async fn create_user(&self, user: User) -> JournalStoreResult<User> {
        sqlx::query(
            "INSERT INTO users (id, email, name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> JournalStoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, name, created_at, updated_at
             FROM users
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_email(&self, email: &str) -> JournalStoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, name, created_at, updated_at
             FROM users
             WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn create_entry(&self, entry: JournalEntry) -> JournalStoreResult<JournalEntry> {
        sqlx::query(
            "INSERT INTO journal_entries (id, user_id, title, content, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(entry.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_entries(
        &self,
        filter: EntryFilter,
    ) -> JournalStoreResult<(Vec<JournalEntry>, u32)> {
        // LIMIT -1 disables the limit in SQLite.
        let limit = filter.limit.map(i64::from).unwrap_or(-1);
        let offset = filter.offset.map(i64::from).unwrap_or(0);

        let (rows, total): (Vec<JournalEntryRow>, i64) = match filter.user_id {
            Some(user_id) => {
                let total = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM journal_entries WHERE user_id = ?",
                )
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await?;

                let rows = sqlx::query_as(
                    "SELECT id, user_id, title, content, created_at
                     FROM journal_entries
                     WHERE user_id = ?
                     ORDER BY created_at DESC, id DESC
                     LIMIT ? OFFSET ?",
                )
                .bind(user_id.to_string())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                (rows, total)
            }
            None => {
                let total = sqlx::query_scalar("SELECT COUNT(*) FROM journal_entries")
                    .fetch_one(&self.pool)
                    .await?;

                let rows = sqlx::query_as(
                    "SELECT id, user_id, title, content, created_at
                     FROM journal_entries
                     ORDER BY created_at DESC, id DESC
                     LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                (rows, total)
            }
        };

        Ok((
            rows.into_iter().map(JournalEntry::from).collect(),
            total as u32,
        ))
    }
}
