//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::document::DocumentFormat;
use crate::error::ExtractError;
use crate::html::html_to_text;
use textgist_domain::{InputSource, UploadedFile};
use tracing::{debug, info};

/// Turns any supported input into a single plain-text string
///
/// Holds one pooled HTTP client for page fetches; cheap to share behind an
/// `Arc` across concurrent requests.
pub struct ContentExtractor {
    client: reqwest::Client,
    config: ExtractorConfig,
}

impl ContentExtractor {
    /// Create a new extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Config)?;

        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ExtractError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract plain text from `source`
    ///
    /// The result may be empty; deciding whether that is acceptable is left
    /// to the caller.
    pub async fn extract(&self, source: &InputSource) -> Result<String, ExtractError> {
        match source {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(file) => self.extract_file(file).await,
            InputSource::Url(url) => self.extract_url(url).await,
        }
    }

    /// Parse an uploaded PDF or DOCX document
    pub async fn extract_file(&self, file: &UploadedFile) -> Result<String, ExtractError> {
        let format = DocumentFormat::from_filename(&file.filename)?;

        info!(
            "Reading {:?} upload '{}' ({} bytes)",
            format,
            file.filename,
            file.bytes.len()
        );

        // Parsing is CPU-bound; keep it off the async workers
        let bytes = file.bytes.clone();
        tokio::task::spawn_blocking(move || format.read(&bytes))
            .await
            .map_err(|e| ExtractError::ParseFailure(format!("Task join error: {}", e)))?
    }

    /// Fetch a web page and keep its content text
    pub async fn extract_url(&self, url: &str) -> Result<String, ExtractError> {
        info!("Fetching URL {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExtractError::FetchFailure(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExtractError::FetchFailure(e.to_string()))?;

        // Body read errors are transport failures (stalls, resets); decoding is lossy
        let body = response
            .text()
            .await
            .map_err(|e| ExtractError::FetchFailure(e.to_string()))?;

        debug!("Fetched {} bytes of HTML from {}", body.len(), url);

        html_to_text(&body)
    }
}
