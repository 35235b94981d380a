use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::{IntoParams, ToSchema};

use crate::{
    controller::util::resolve::resolve_user_id,
    error::Error,
    model::{api::ErrorDto, app::AppState},
};

pub static GAME_TAG: &str = "game";

/// Signed character payload built client-side for the gateway exchange.
/// The gateway speaks snake_case, so these two endpoints do too.
#[derive(Deserialize, ToSchema)]
pub struct GameTokenDto {
    pub encoded_payload: String,
    pub sign: String,
}

#[derive(Deserialize, IntoParams)]
pub struct GameInfoQuery {
    /// A lite token from a preceding token exchange.
    pub lite_token: String,
}

/// Exchange a signed character payload for a gateway lite token
///
/// Relays the payload to the game's gateway unmodified and returns the
/// gateway's response body as-is, including upstream error statuses.
///
/// # Responses
/// - 200 (OK): The gateway's token response
/// - 400 (Bad Request): Payload failed schema validation
/// - 401 (Unauthorized): No registered token and no session user
#[utoipa::path(
    post,
    path = "/api/game/token",
    tag = GAME_TAG,
    request_body = GameTokenDto,
    responses(
        (status = 200, description = "Gateway token response", body = serde_json::Value),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Unauthenticated", body = ErrorDto)
    ),
)]
pub async fn game_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    payload: Result<Json<GameTokenDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    resolve_user_id(&state, &headers, &session).await?;

    let Json(payload) = payload.map_err(|rejection| Error::ValidationError(rejection.body_text()))?;

    let body = state
        .gateway
        .fetch_lite_token(&payload.encoded_payload, &payload.sign)
        .await?;

    Ok(Json(body))
}

/// Fetch character info for a previously issued lite token
///
/// # Responses
/// - 200 (OK): The gateway's character info blob
/// - 400 (Bad Request): Missing liteToken query parameter
/// - 401 (Unauthorized): No registered token and no session user
#[utoipa::path(
    get,
    path = "/api/game/info",
    tag = GAME_TAG,
    params(GameInfoQuery),
    responses(
        (status = 200, description = "Gateway character info", body = serde_json::Value),
        (status = 400, description = "Missing lite token", body = ErrorDto),
        (status = 401, description = "Unauthenticated", body = ErrorDto)
    ),
)]
pub async fn game_info(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
    Query(query): Query<GameInfoQuery>,
) -> Result<impl IntoResponse, Error> {
    resolve_user_id(&state, &headers, &session).await?;

    let body = state.gateway.fetch_character_info(&query.lite_token).await?;

    Ok(Json(body))
}
