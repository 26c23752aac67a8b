//! The summarization request lifecycle
//!
//! A request walks through a fixed sequence of stages. The first stage that
//! fails ends the request; nothing is retried and nothing is kept afterwards.
//!
//! ```text
//! ReceiveInput → Validate → Extract → CheckNonEmpty → Normalize
//!              → Truncate → CallModel → Respond
//! ```

use crate::error::ApiError;
use std::fmt;
use std::sync::Arc;
use textgist_domain::{truncate_chars, SummaryLength, SummaryRequest, UploadedFile, MAX_INPUT_CHARS};
use textgist_extractor::ContentExtractor;
use textgist_llm::SummaryProvider;
use textgist_normalizer::TextNormalizer;
use tracing::{debug, error, info, warn};

/// Request lifecycle stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Form fields have been read
    ReceiveInput,
    /// Pick exactly one input source
    Validate,
    /// Turn the source into plain text
    Extract,
    /// Reject whitespace-only text
    CheckNonEmpty,
    /// Stopword removal and lemmatization
    Normalize,
    /// Cap the text length
    Truncate,
    /// Ask the model for a summary
    CallModel,
    /// Summary ready
    Respond,
}

impl Stage {
    /// Stage name as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ReceiveInput => "receive_input",
            Stage::Validate => "validate",
            Stage::Extract => "extract",
            Stage::CheckNonEmpty => "check_non_empty",
            Stage::Normalize => "normalize",
            Stage::Truncate => "truncate",
            Stage::CallModel => "call_model",
            Stage::Respond => "respond",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form fields of one `POST /summarize` request
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    /// `text_input`
    pub text: Option<String>,
    /// `file`
    pub file: Option<UploadedFile>,
    /// `url`
    pub url: Option<String>,
    /// `summary_length`
    pub summary_length: Option<String>,
}

/// Shared, immutable request processor
pub struct SummaryPipeline {
    extractor: Arc<ContentExtractor>,
    normalizer: Arc<TextNormalizer>,
    provider: Arc<dyn SummaryProvider>,
}

impl SummaryPipeline {
    /// Assemble a pipeline from its components
    pub fn new(
        extractor: Arc<ContentExtractor>,
        normalizer: Arc<TextNormalizer>,
        provider: Arc<dyn SummaryProvider>,
    ) -> Self {
        Self {
            extractor,
            normalizer,
            provider,
        }
    }

    /// Model answering summary requests
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Run one request from raw form fields to summary text
    pub async fn run(&self, fields: FormFields) -> Result<String, ApiError> {
        enter(Stage::ReceiveInput);
        let length = SummaryLength::from_form_value(fields.summary_length.as_deref());

        enter(Stage::Validate);
        let request = SummaryRequest::from_fields(fields.text, fields.file, fields.url, length)
            .map_err(|e| fail(Stage::Validate, e.into()))?;
        info!(
            "Summarizing {} input at length '{}'",
            request.source.kind(),
            request.length
        );

        self.summarize(request).await
    }

    /// Run a request whose input source is already chosen
    pub async fn summarize(&self, request: SummaryRequest) -> Result<String, ApiError> {
        enter(Stage::Extract);
        let extracted = self
            .extractor
            .extract(&request.source)
            .await
            .map_err(|e| fail(Stage::Extract, e.into()))?;

        enter(Stage::CheckNonEmpty);
        if extracted.trim().is_empty() {
            return Err(fail(Stage::CheckNonEmpty, ApiError::EmptyContent));
        }

        enter(Stage::Normalize);
        let normalizer = Arc::clone(&self.normalizer);
        let normalized = tokio::task::spawn_blocking(move || normalizer.normalize(&extracted))
            .await
            .map_err(|e| fail(Stage::Normalize, ApiError::Internal(e.to_string())))?;

        enter(Stage::Truncate);
        let truncated = truncate_chars(&normalized, MAX_INPUT_CHARS);
        debug!(
            "Normalized text has {} characters, sending {}",
            normalized.chars().count(),
            truncated.chars().count()
        );

        enter(Stage::CallModel);
        let summary = self
            .provider
            .summarize(truncated, request.length)
            .await
            .map_err(|e| fail(Stage::CallModel, e.into()))?;

        enter(Stage::Respond);
        info!("Summary ready ({} characters)", summary.chars().count());
        Ok(summary)
    }
}

fn enter(stage: Stage) {
    debug!(stage = %stage, "Entering stage");
}

fn fail(stage: Stage, err: ApiError) -> ApiError {
    if err.status().is_server_error() {
        error!(stage = %stage, "Request failed: {}", err);
    } else {
        warn!(stage = %stage, "Request rejected: {}", err);
    }
    err
}
