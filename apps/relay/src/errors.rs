use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::comparison::validation::ValidationError;
use crate::llm_client::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Clients only ever see a flat `{"error": ..}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unreadable request body: {0}")]
    InvalidBody(String),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Malformed completion: {0}")]
    MalformedCompletion(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] sqlx::Error),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::MalformedCompletion(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidBody(msg) => {
                tracing::error!("Failed to read request body: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to process request" }),
                )
            }
            AppError::Completion(e) => {
                tracing::error!("Error processing request: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to process request" }),
                )
            }
            AppError::MalformedCompletion(msg) => {
                tracing::error!("Failed to process request: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to process request" }),
                )
            }
            AppError::Fetch(e) => {
                tracing::error!("Error fetching data: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to fetch data", "details": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
