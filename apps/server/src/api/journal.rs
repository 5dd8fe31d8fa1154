//! Journal API endpoints.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use entities::JournalEntry;
use journal_store::{EntryFilter, JournalStore};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Request body for creating a journal entry.
///
/// Missing fields deserialize as empty strings so that absent and empty
/// input fail validation the same way.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Query parameters for listing journal entries.
#[derive(Debug, Default, Deserialize)]
pub struct ListEntriesQuery {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Response body for listing journal entries.
#[derive(Debug, Serialize)]
pub struct ListEntriesResponse {
    /// The requested page of entries, newest first.
    pub entries: Vec<JournalEntry>,
    /// Number of entries the user owns, before pagination.
    pub total: u32,
}

/// Lists the current user's journal entries, newest first.
pub async fn list_entries<S: JournalStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ListEntriesQuery>,
) -> ServerResult<Json<ListEntriesResponse>> {
    let filter = EntryFilter {
        user_id: Some(user.id),
        limit: query.limit,
        offset: query.offset,
    };

    let (entries, total) = state.store.list_entries(filter).await?;

    Ok(Json(ListEntriesResponse { entries, total }))
}

/// Creates a journal entry owned by the current user.
pub async fn create_entry<S: JournalStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateEntryRequest>,
) -> ServerResult<Json<JournalEntry>> {
    if request.title.is_empty() || request.content.is_empty() {
        return Err(ServerError::InvalidRequest(
            "Title and content are required".to_string(),
        ));
    }

    let entry = JournalEntry::new(user.id, request.title, request.content);
    let entry = state.store.create_entry(entry).await?;

    tracing::info!(entry_id = %entry.id, "Journal entry created");

    Ok(Json(entry))
}
