use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alliance::AllianceStatsDto,
        app::AppState,
        profile::GameProfile,
        ranking::{AllianceQuery, PlayerQuery},
    },
    service::ranking::RankingService,
};

pub static RANKING_TAG: &str = "rankings";

/// Player rankings
///
/// Public. Filters by exact server/alliance match when given, then orders
/// by the chosen field (default powerNow, descending). Missing numeric
/// fields rank as 0; ties keep insertion order.
///
/// # Responses
/// - 200 (OK): Ordered profiles; an empty list is a valid result
/// - 400 (Bad Request): Unknown sortBy or sortOrder value
#[utoipa::path(
    get,
    path = "/api/rankings/players",
    tag = RANKING_TAG,
    params(PlayerQuery),
    responses(
        (status = 200, description = "Ordered player profiles", body = Vec<GameProfile>)
    ),
)]
pub async fn players(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> impl IntoResponse {
    Json(RankingService::new(&state.storage).players(query).await)
}

/// Alliance rankings
///
/// Public. Filters by server when given, computes averagePower per row at
/// read time, then orders by the chosen field (default totalPower,
/// descending). Zero-member alliances remain listed.
///
/// # Responses
/// - 200 (OK): Ordered alliance rows with averagePower
/// - 400 (Bad Request): Unknown sortBy or sortOrder value
#[utoipa::path(
    get,
    path = "/api/rankings/alliances",
    tag = RANKING_TAG,
    params(AllianceQuery),
    responses(
        (status = 200, description = "Ordered alliance stats", body = Vec<AllianceStatsDto>)
    ),
)]
pub async fn alliances(
    State(state): State<AppState>,
    Query(query): Query<AllianceQuery>,
) -> impl IntoResponse {
    Json(RankingService::new(&state.storage).alliances(query).await)
}
