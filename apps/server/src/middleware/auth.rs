//! Authentication middleware.

use std::sync::Arc;

use auth::Claims;
use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use journal_store::JournalStore;
use serde_json::json;
use uuid::Uuid;

use crate::state::AppState;

/// Authenticated user information.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
    /// User display name.
    pub name: Option<String>,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = auth::AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.user_id()?,
            email: claims.email,
            name: claims.name,
        })
    }
}

/// Extracts the session token from the Authorization header.
fn extract_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// The 401 response shared by every rejection path.
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

/// Authentication middleware.
///
/// This middleware extracts the session token from the Authorization
/// header, resolves it, and stores the authenticated user in the request
/// extensions. Every rejection mode produces the same 401 body; the
/// reason only goes to the logs.
pub async fn auth_middleware<S: JournalStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_token(&request) {
        Some(token) => token,
        None => {
            tracing::debug!("Missing authorization header");
            return unauthorized();
        }
    };

    let claims = match state.session_manager.resolve(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Session token rejected");
            return unauthorized();
        }
    };

    // Store authenticated user in request extensions
    match AuthenticatedUser::try_from(claims) {
        Ok(user) => {
            request.extensions_mut().insert(user);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Invalid session claims");
            return unauthorized();
        }
    }

    next.run(request).await
}
