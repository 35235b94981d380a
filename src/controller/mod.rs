//! HTTP controller endpoints for the gamestats web API.
//!
//! Axum handlers for authentication, game profiles, rankings and the game
//! gateway proxy. Controllers resolve the acting user, validate inputs,
//! call into services, and map results to HTTP responses. They integrate
//! with tower-sessions for session management and use utoipa for OpenAPI
//! documentation.

pub mod auth;
pub mod game;
pub mod profile;
pub mod ranking;
pub mod util;
