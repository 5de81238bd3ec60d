//! API error taxonomy and HTTP response mapping.
//!
//! Handlers return `Result<_, ApiError>`; the `IntoResponse` impl turns each
//! variant into a JSON `{"error": "..."}` body with the matching status
//! code. Infrastructure failures (pool exhaustion, query errors) arrive as
//! `anyhow::Error` through the `Internal` variant and surface as opaque 500s,
//! with the detail going to the log rather than the wire.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request input. Maps to HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// The referenced record does not exist. Maps to HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Anything else: database unavailable, query failure. Maps to HTTP 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation(m) | Self::NotFound(m) => m.clone(),
            Self::Internal(e) => {
                tracing::error!("internal error: {e:#}");
                "Internal server error".to_string()
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::validation("Missing required fields");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::not_found("Ping not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Ping not found");
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = ApiError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_status_codes() {
        let resp = ApiError::not_found("Ping not found").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::validation("Missing required fields").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
