// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// The client body is missing `message` or it is not a JSON string.
    #[error("Message is required and must be a string.")]
    InvalidInput,

    /// Anything that went wrong between us and the completion API. The
    /// client only ever sees the generic message; the cause stays in the logs.
    #[error("Something went wrong while talking to the AI.")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Upstream(cause) => {
                tracing::error!(error = ?cause, "upstream completion call failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
