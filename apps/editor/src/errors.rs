use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::backend_client::upload::UploadError;
use crate::backend_client::BackendError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Backend error: {0}")]
    Backend(BackendError),
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err.status() {
            Some(401) => AppError::Unauthorized,
            _ => AppError::Backend(err),
        }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidPdfDataUri => AppError::UnprocessableEntity(err.to_string()),
            UploadError::UnsupportedType(_) | UploadError::Empty => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Backend(e) => {
                tracing::error!("Backend error: {e}");
                let message = match e {
                    BackendError::Api { message, .. } => message.clone(),
                    _ => "The resume service is unavailable".to_string(),
                };
                (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
