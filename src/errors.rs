use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::consultant::ConsultantError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Store(String),

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("style consultant is not configured")]
    ConsultantUnavailable,

    #[error("consultant error: {0}")]
    Consultant(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("rate limited: {0}")]
    RateLimited(String),
}

impl From<ConsultantError> for AppError {
    fn from(e: ConsultantError) -> Self {
        match e {
            ConsultantError::RateLimited => AppError::RateLimited(e.to_string()),
            ConsultantError::MissingCredential => AppError::Consultant(e.to_string()),
            ConsultantError::Upstream(msg) => AppError::Consultant(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::ConsultantUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Consultant(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
