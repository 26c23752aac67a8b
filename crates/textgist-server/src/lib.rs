//! TextGist Server
//!
//! HTTP front end for the summarization pipeline. Accepts pasted text, a PDF
//! or DOCX upload, or a web page URL and answers with a model-written summary.
//!
//! All shared state (extractor, normalizer, model client) is built once at
//! startup and never mutated afterwards.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod pipeline;

use config::{ConfigError, ServerConfig};
use handlers::{create_router, AppState};
use pipeline::SummaryPipeline;
use std::sync::Arc;
use textgist_extractor::{ContentExtractor, ExtractError};
use textgist_llm::{LlmError, OpenRouterProvider, SummaryProvider};
use textgist_normalizer::{NormalizerError, TextNormalizer};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Extractor could not be built
    #[error("Extractor initialization failed: {0}")]
    Extractor(#[from] ExtractError),

    /// Normalizer resources could not be built
    #[error("Normalizer initialization failed: {0}")]
    Normalizer(#[from] NormalizerError),

    /// Model client could not be built
    #[error("Model client initialization failed: {0}")]
    Llm(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

impl AppState {
    /// Build the shared state around any summary provider
    pub fn with_provider(
        config: &ServerConfig,
        provider: Arc<dyn SummaryProvider>,
    ) -> Result<Self, ServerError> {
        let extractor = Arc::new(ContentExtractor::new(config.extractor_config())?);
        let normalizer = Arc::new(TextNormalizer::new()?);
        let pipeline = SummaryPipeline::new(extractor, normalizer, provider);

        Ok(AppState {
            pipeline: Arc::new(pipeline),
        })
    }

    /// Build the shared state talking to the configured chat-completion API
    pub fn from_config(config: &ServerConfig, api_key: String) -> Result<Self, ServerError> {
        let provider = OpenRouterProvider::new(config.openrouter_config(api_key))?;
        Self::with_provider(config, Arc::new(provider))
    }
}

/// Initialize tracing with `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep it
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the summarization HTTP server
///
/// Builds the shared state, applies CORS and tracing layers, and serves
/// until the process is stopped.
pub async fn start_server(config: ServerConfig, api_key: String) -> Result<(), ServerError> {
    init_tracing();

    config.validate()?;

    info!("Starting TextGist server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {} via {}", config.llm.model, config.llm.endpoint);
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let state = AppState::from_config(&config, api_key)?;
    let app = create_router(state, &config)?;

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
