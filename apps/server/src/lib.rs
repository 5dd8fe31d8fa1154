//! Daybook journal server.
//!
//! The server exposes the journal HTTP API: session-gated listing and
//! creation of journal entries, backed by a pluggable journal store.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use auth::{SessionConfig, SessionManager};
use axum::Router;
use journal_store::JournalStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: JournalStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router(state.clone())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: JournalStore>(config: Config, store: S) -> Arc<AppState<S>> {
    let session_config = SessionConfig::new(config.jwt_secret.clone())
        .with_expiration_hours(config.jwt_expiration_hours);
    let session_manager = SessionManager::new(session_config);

    create_shared_state(config, store, session_manager)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
