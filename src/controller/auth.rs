use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::resolve::{bearer_token, resolve_user_id},
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        session::user::SessionUserId,
        user::{AuthDto, LoginDto, RegisterDto, UserDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
///
/// Creates the user, starts a session, and issues a bearer token the client
/// attaches to subsequent requests.
///
/// # Responses
/// - 201 (Created): Account created; body is the user plus a fresh token
/// - 400 (Bad Request): Username or email already exists, or invalid payload
/// - 500 (Internal Server Error): Session storage or password hashing failed
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthDto),
        (status = 400, description = "Username or email taken, or invalid payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(|rejection| Error::ValidationError(rejection.body_text()))?;

    let user = AuthService::new(&state.storage).register(payload).await?;

    SessionUserId::insert(&session, user.id).await?;
    let token = state.tokens.issue(user.id).await;

    tracing::info!(user_id = user.id, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(AuthDto {
            user: UserDto::from(user),
            token,
        }),
    ))
}

/// Log in with username and password
///
/// Starts a session and issues a fresh bearer token on success.
///
/// # Responses
/// - 200 (OK): Body is the user plus a fresh token
/// - 401 (Unauthorized): Unknown username or wrong password
/// - 500 (Internal Server Error): Session storage failed
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(|rejection| Error::ValidationError(rejection.body_text()))?;

    let user = AuthService::new(&state.storage).login(payload).await?;

    SessionUserId::insert(&session, user.id).await?;
    let token = state.tokens.issue(user.id).await;

    tracing::debug!(user_id = user.id, "user logged in");

    Ok(Json(AuthDto {
        user: UserDto::from(user),
        token,
    }))
}

/// Log out
///
/// Revokes the bearer token supplied with this request (other devices stay
/// logged in) and ends the session.
///
/// # Responses
/// - 200 (OK): Logged out; also returned when no credential was supplied
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    if let Some(token) = bearer_token(&headers) {
        if state.tokens.revoke(token).await {
            tracing::debug!("revoked bearer token on logout");
        }
    }

    // Only touch the session when a user is actually in it.
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::OK)
}

/// Get the current user
///
/// # Responses
/// - 200 (OK): The acting user, resolved from bearer token or session
/// - 401 (Unauthorized): No registered token and no session user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Unauthenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = resolve_user_id(&state, &headers, &session).await?;

    let Some(user) = UserRepository::new(&state.storage).get(user_id).await else {
        session.clear().await;

        tracing::warn!(
            user_id,
            "credential resolved to a user missing from the store; cleared session"
        );

        return Err(AuthError::Unauthenticated.into());
    };

    Ok(Json(UserDto::from(user)))
}
