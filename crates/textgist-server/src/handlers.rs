//! HTTP request handlers for the summarization service.
//!
//! Implements the multipart summarize endpoint and a health check using axum.

use crate::config::{ConfigError, ServerConfig};
use crate::error::ApiError;
use crate::pipeline::{FormFields, SummaryPipeline};
use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use textgist_domain::UploadedFile;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Request processor shared by every handler task
    pub pipeline: Arc<SummaryPipeline>,
}

/// Successful summarize response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The generated summary
    pub summary: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" when the server answers
    pub status: String,
    /// Model summaries are requested from
    pub model: String,
}

/// POST /summarize - Summarize text, an uploaded document, or a web page
async fn summarize(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let fields = match multipart {
        Ok(multipart) => read_form(multipart).await?,
        Err(rejection) => {
            // Not a multipart body at all: no form fields were sent
            debug!("Request without multipart form: {}", rejection);
            FormFields::default()
        }
    };

    let summary = state.pipeline.run(fields).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn read_form(mut multipart: Multipart) -> Result<FormFields, ApiError> {
    let mut fields = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "text_input" => fields.text = Some(field_text(field).await?),
            "url" => fields.url = Some(field_text(field).await?),
            "summary_length" => fields.summary_length = Some(field_text(field).await?),
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Multipart(e.to_string()))?;
                fields.file = Some(UploadedFile::new(filename, bytes.to_vec()));
            }
            other => debug!("Ignoring unknown form field '{}'", other),
        }
    }

    Ok(fields)
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))
}

/// GET /health - Liveness and active model
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        model: state.pipeline.model_name().to_string(),
    })
}

/// CORS policy for the configured browser origins
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::Invalid(format!("Invalid CORS origin '{}'", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState, config: &ServerConfig) -> Result<AxumRouter, ConfigError> {
    Ok(AxumRouter::new()
        .route("/summarize", post(summarize))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
