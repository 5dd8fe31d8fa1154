//! Authentication API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use entities::User;
use journal_store::JournalStore;

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Gets the current authenticated user.
///
/// The user record is provisioned by the identity integration; a valid
/// session without a matching record is a 404, not a server fault.
pub async fn get_current_user<S: JournalStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<User>> {
    let user = user.ok_or(ServerError::AuthenticationRequired)?.0;

    let user = state
        .store
        .get_user(user.id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
