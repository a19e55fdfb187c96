//! Request-level error type and its JSON rendering

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::StoreError;

/// Everything a handler can fail with.
///
/// `NotFound` and `InvalidInput` carry client-facing messages. `Internal`
/// carries detail for the log only; clients get a generic message.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl ApiError {
    /// NotFound for a timer id, numeric or otherwise. A path id that never
    /// parses can never have been issued, so it gets the same message.
    pub fn timer_not_found(id: impl Display) -> Self {
        ApiError::NotFound(format!("Timer with id {id} not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "success": false,
                "error": message,
            })),
        )
            .into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ApiError::timer_not_found(id),
            StoreError::Lock(detail) => ApiError::Internal(detail),
        }
    }
}
