//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations,
//! collected into one OpenAPI document, and served alongside Swagger UI
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/register` - Create an account, start a session, issue a token
/// - `POST /api/login` - Authenticate with username and password
/// - `POST /api/logout` - Revoke the presented token and clear the session
/// - `GET /api/user` - Get the acting user
/// - `GET /api/profile` - Get the acting user's game profile
/// - `POST /api/profile/game-data` - Submit a character snapshot
/// - `PATCH /api/profile/alliance` - Edit the profile's alliance
/// - `GET /api/rankings/players` - Player leaderboard
/// - `GET /api/rankings/alliances` - Alliance leaderboard
/// - `POST /api/game/token` - Gateway lite token exchange
/// - `GET /api/game/info` - Gateway character info fetch
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Gamestats", description = "Gamestats API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::profile::PROFILE_TAG, description = "Game profile API routes"),
        (name = controller::ranking::RANKING_TAG, description = "Leaderboard API routes"),
        (name = controller::game::GAME_TAG, description = "Game gateway proxy routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::profile::get_profile))
        .routes(routes!(controller::profile::submit_game_data))
        .routes(routes!(controller::profile::update_alliance))
        .routes(routes!(controller::ranking::players))
        .routes(routes!(controller::ranking::alliances))
        .routes(routes!(controller::game::game_token))
        .routes(routes!(controller::game::game_info))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
