use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::InternalServerError;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The gateway could not be reached or the call timed out. The whole
    /// fetch flow is treated as failed; no state has been mutated.
    #[error("Game gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The gateway answered with a non-2xx status. Status and body are
    /// relayed to the caller untouched.
    #[error("Game gateway returned status {status}")]
    Upstream { status: u16, body: String },
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::Transport(_) => InternalServerError(self).into_response(),
            Self::Upstream { status, body } => {
                tracing::debug!(status, "relaying gateway error response");

                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

                (status, body).into_response()
            }
        }
    }
}
