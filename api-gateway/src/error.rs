//! Error handling for the API gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Message returned for a malformed ticker
pub const INVALID_TICKER_MESSAGE: &str = "Ticker must be 6 digits (e.g., 069500)";

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short error label
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid ticker format: {0}")]
    InvalidTicker(String),

    #[error("Route {0} not found")]
    NotFound(String),

    /// A lookup behind a route failed; `context` is the label the client sees
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: common::error::Error,
    },
}

impl ApiError {
    /// Map a service failure to a 500 labelled `context`
    pub fn upstream(context: &'static str) -> impl FnOnce(common::error::Error) -> Self {
        move |source| ApiError::Upstream { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Generate a request ID for tracking errors
        let request_id = Uuid::new_v4().to_string();

        let (status, body) = match &self {
            ApiError::InvalidTicker(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid ticker format", INVALID_TICKER_MESSAGE),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Not Found", self.to_string()),
            ),
            ApiError::Upstream { context, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(*context, source.to_string()),
            ),
        };

        if status.is_server_error() {
            tracing::error!("API Error [{}]: {:?}", request_id, &self);
        } else {
            tracing::debug!("API Error [{}]: {}", request_id, &self);
        }

        (status, Json(body)).into_response()
    }
}
