use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request carries no registered bearer token and no session user")]
    Unauthenticated,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Email already exists")]
    EmailTaken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                // Same body for unknown username and wrong password so the
                // response does not reveal which accounts exist.
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid username or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UsernameTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Username already exists".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Email already exists".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
