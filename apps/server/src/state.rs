//! Application state.

use std::sync::Arc;

use auth::SessionManager;
use journal_store::JournalStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: JournalStore> {
    /// Server configuration.
    pub config: Config,
    /// Journal store.
    pub store: S,
    /// Session manager.
    pub session_manager: SessionManager,
}

impl<S: JournalStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S, session_manager: SessionManager) -> Self {
        Self {
            config,
            store,
            session_manager,
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config, store, and session manager.
pub fn create_shared_state<S: JournalStore>(
    config: Config,
    store: S,
    session_manager: SessionManager,
) -> SharedState<S> {
    Arc::new(AppState::new(config, store, session_manager))
}
