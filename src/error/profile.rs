use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("No game profile exists for user ID {0}")]
    NotFound(i32),
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(user_id) => {
                tracing::debug!(user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Profile not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
