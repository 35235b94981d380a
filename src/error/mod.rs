//! Error types for the gamestats server.
//!
//! A single root [`Error`] enum aggregates domain-specific error types
//! (authentication, profile, gateway, configuration) and external library
//! errors. All errors implement `IntoResponse` so handlers can simply return
//! `Result<_, Error>`; anything without a specific HTTP mapping collapses to
//! a generic 500 with the real cause logged server-side.

pub mod auth;
pub mod config;
pub mod gateway;
pub mod profile;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, gateway::GatewayError, profile::ProfileError},
    model::api::ErrorDto,
};

/// Main error type for the gamestats server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing credentials, bad login, taken username).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Game profile error (no profile linked for the user).
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// Game gateway error (upstream non-2xx, transport failure).
    #[error(transparent)]
    GatewayError(#[from] GatewayError),
    /// Request body failed schema validation before any store mutation.
    #[error("Invalid request payload: {0}")]
    ValidationError(String),
    /// Internal error indicating a bug in gamestats' code.
    #[error("Internal error with gamestats' code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing error.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            Self::GatewayError(err) => err.into_response(),
            Self::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type converting any displayable error into a 500 response.
///
/// Logs the full error for diagnostics but returns a generic message to the
/// client so implementation details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
