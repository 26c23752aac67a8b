//! Request failures and their HTTP mapping
//!
//! Every failure reaches the client as `{"detail": "..."}` with the status
//! chosen here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use textgist_domain::NoInputProvided;
use textgist_extractor::ExtractError;
use textgist_llm::LlmError;
use thiserror::Error;

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub detail: String,
}

/// A failed summarization request
#[derive(Debug, Error)]
pub enum ApiError {
    /// None of text, file or URL carried input
    #[error("No input provided. Please provide text, upload a file, or enter a URL.")]
    NoInput,

    /// Extraction produced nothing but whitespace
    #[error("Input text is empty. Please provide content to summarize.")]
    EmptyContent,

    /// Document or page extraction failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The summary could not be obtained
    #[error("{}", summarize_detail(.0))]
    Summarize(#[from] LlmError),

    /// The multipart body could not be read
    #[error("Error reading request: {0}")]
    Multipart(String),

    /// Anything else that went wrong on our side
    #[error("Internal error: {0}")]
    Internal(String),
}

fn summarize_detail(error: &LlmError) -> String {
    match error {
        LlmError::Upstream { .. } => error.to_string(),
        other => format!("Error summarizing text: {}", other),
    }
}

impl From<NoInputProvided> for ApiError {
    fn from(_: NoInputProvided) -> Self {
        ApiError::NoInput
    }
}

impl ApiError {
    /// HTTP status for this failure
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoInput | ApiError::EmptyContent => StatusCode::BAD_REQUEST,
            ApiError::Extract(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Extract(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Summarize(LlmError::Upstream { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Summarize(_) | ApiError::Multipart(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
