use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::agents::AgentError;
use crate::llm_client::LlmError;
use crate::profile::editing::EditError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Invalid upload: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Agent(AgentError::Precondition(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Agent(e @ AgentError::ProfileContext(_)) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::Agent(AgentError::Llm(e @ LlmError::RateLimitExhausted { .. })) => {
                tracing::error!("LLM error: {e:?}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "LLM_RATE_LIMITED",
                    "The AI service is busy. Please try again shortly.".to_string(),
                )
            }
            AppError::Agent(e) => {
                // Debug output keeps the status, raw body, and raw model text.
                tracing::error!("LLM error: {e:?}");
                let message = match e {
                    AgentError::EmptyOutput => "The AI service returned no output",
                    AgentError::Contract { .. } | AgentError::Llm(LlmError::Decode(_)) => {
                        "The AI response was not in the expected format"
                    }
                    _ => "An AI processing error occurred",
                };
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", message.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
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
