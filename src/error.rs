//! # error
//!
//! Centralised application error type.
//!
//! Every handler returns `Result<_, ApiError>`.  The `IntoResponse` impl
//! converts these into the `{"message": "..."}` JSON bodies the web client
//! expects, so failures are always machine-readable.  Internal errors are
//! logged server-side and surfaced to the client as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is missing required fields or carries invalid values.
    #[error("{0}")]
    BadRequest(String),

    /// No credentials, or credentials that do not match a known account.
    #[error("{0}")]
    Unauthorized(String),

    /// A bearer token was presented but is invalid or expired.
    #[error("{0}")]
    Forbidden(String),

    /// The request collides with existing state (duplicate registration).
    #[error("{0}")]
    Conflict(String),

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg)   => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg)    => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::Conflict(msg)     => (StatusCode::CONFLICT, msg.clone()),
            ApiError::Internal(err) => {
                // Full cause stays in the server log; clients get a generic body.
                tracing::error!(error = %err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}
