//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lights_domain::error::LightsError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Stable machine-checkable category.
    category: &'static str,
    /// Human-readable description suitable for direct display.
    description: String,
}

/// Maps [`LightsError`] to an HTTP response with appropriate status code.
pub struct ApiError(LightsError);

impl From<LightsError> for ApiError {
    fn from(err: LightsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, description) = match &self.0 {
            LightsError::InvalidInput(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LightsError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            LightsError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                category: self.0.category(),
                description,
            },
        };

        (status, Json(body)).into_response()
    }
}
