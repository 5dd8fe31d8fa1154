//! API endpoints.

pub mod auth;
pub mod journal;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use journal_store::JournalStore;

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

/// Creates the API router with all endpoints.
///
/// Journal and auth endpoints sit behind the session middleware; the
/// health check does not.
pub fn create_router<S: JournalStore + 'static>(
    state: Arc<AppState<S>>,
) -> Router<Arc<AppState<S>>> {
    let protected = Router::new()
        // Journal endpoints
        .route("/api/journal/list", get(journal::list_entries))
        .route("/api/journal/create", post(journal::create_entry))
        // Auth endpoints
        .route("/api/auth/me", get(auth::get_current_user))
        .route_layer(from_fn_with_state(state, auth_middleware::<S>));

    Router::new()
        .merge(protected)
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
