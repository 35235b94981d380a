use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::resolve::resolve_user_id,
    data::profile::ProfileRepository,
    error::{profile::ProfileError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        profile::{GameDataDto, GameProfile, UpdateAllianceDto},
    },
    service::profile::ProfileService,
};

pub static PROFILE_TAG: &str = "profile";

/// Get the acting user's game profile
///
/// # Responses
/// - 200 (OK): The user's linked game profile
/// - 401 (Unauthorized): No registered token and no session user
/// - 404 (Not Found): The user has not linked a character yet
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "The user's game profile", body = GameProfile),
        (status = 401, description = "Unauthenticated", body = ErrorDto),
        (status = 404, description = "No profile linked", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = resolve_user_id(&state, &headers, &session).await?;

    let Some(profile) = ProfileRepository::new(&state.storage)
        .get_by_user_id(user_id)
        .await
    else {
        return Err(ProfileError::NotFound(user_id).into());
    };

    Ok(Json(profile))
}

/// Submit a character snapshot fetched from the game gateway
///
/// Creates the profile on first submission, otherwise merges the stat
/// fields into the existing one. Alliance aggregates are adjusted in the
/// same step. Validation failures happen before any store mutation.
///
/// # Responses
/// - 200 (OK): The created or updated profile
/// - 400 (Bad Request): Payload failed schema validation
/// - 401 (Unauthorized): No registered token and no session user
#[utoipa::path(
    post,
    path = "/api/profile/game-data",
    tag = PROFILE_TAG,
    request_body = GameDataDto,
    responses(
        (status = 200, description = "Created or updated profile", body = GameProfile),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "Unauthenticated", body = ErrorDto)
    ),
)]
pub async fn submit_game_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    payload: Result<Json<GameDataDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = resolve_user_id(&state, &headers, &session).await?;

    let Json(payload) = payload.map_err(|rejection| Error::ValidationError(rejection.body_text()))?;

    let profile = ProfileService::new(&state.storage)
        .submit_game_data(user_id, payload)
        .await?;

    Ok(Json(profile))
}

/// Edit the alliance on the acting user's profile
///
/// # Responses
/// - 200 (OK): The updated profile
/// - 400 (Bad Request): Payload failed schema validation
/// - 401 (Unauthorized): No registered token and no session user
/// - 404 (Not Found): The user has not linked a character yet
#[utoipa::path(
    patch,
    path = "/api/profile/alliance",
    tag = PROFILE_TAG,
    request_body = UpdateAllianceDto,
    responses(
        (status = 200, description = "Updated profile", body = GameProfile),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Unauthenticated", body = ErrorDto),
        (status = 404, description = "No profile linked", body = ErrorDto)
    ),
)]
pub async fn update_alliance(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    payload: Result<Json<UpdateAllianceDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = resolve_user_id(&state, &headers, &session).await?;

    let Json(payload) = payload.map_err(|rejection| Error::ValidationError(rejection.body_text()))?;

    let profile = ProfileService::new(&state.storage)
        .update_alliance(user_id, payload.alliance)
        .await?;

    Ok(Json(profile))
}
