use axum::http::{header::AUTHORIZATION, HeaderMap};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
};

/// Resolves the acting user for a request.
///
/// A registered bearer token always wins, even when a session is also
/// present; a request without one falls back to the session. An
/// unregistered token is ignored rather than rejected, so a stale token
/// with a live session still resolves.
///
/// # Returns
/// - `Ok(user_id)` - Request carries a registered token or a session user
/// - `Err(Error::AuthError(AuthError::Unauthenticated))` - Neither credential present
pub async fn resolve_user_id(
    state: &AppState,
    headers: &HeaderMap,
    session: &Session,
) -> Result<i32, Error> {
    if let Some(token) = bearer_token(headers) {
        if let Some(user_id) = state.tokens.resolve(token).await {
            tracing::debug!(user_id, "request authenticated via bearer token");

            return Ok(user_id);
        }
    }

    if let Some(user_id) = SessionUserId::get(session).await? {
        tracing::debug!(user_id, "request authenticated via session");

        return Ok(user_id);
    }

    Err(AuthError::Unauthenticated.into())
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
