//! TextGist Summarization Client
//!
//! Builds the chat prompt for a summary request and sends it to a hosted
//! chat-completion model.
//!
//! # Architecture
//!
//! The `SummaryProvider` trait is the seam between request orchestration and
//! the model. The server only ever talks to `dyn SummaryProvider`.
//!
//! # Providers
//!
//! - `OpenRouterProvider`: OpenRouter chat-completions API over HTTPS
//! - `MockProvider`: Deterministic in-process provider for tests
//!
//! # Examples
//!
//! ```
//! use textgist_domain::SummaryLength;
//! use textgist_llm::{MockProvider, SummaryProvider};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let provider = MockProvider::new("A quick fox jumps.");
//! let summary = rt
//!     .block_on(provider.summarize("quick brown fox", SummaryLength::Short))
//!     .unwrap();
//! assert_eq!(summary, "A quick fox jumps.");
//! ```

#![warn(missing_docs)]

pub mod openrouter;
pub mod prompt;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use textgist_domain::SummaryLength;
use thiserror::Error;

pub use openrouter::{OpenRouterConfig, OpenRouterProvider};
pub use prompt::{ChatMessage, PromptBuilder, SummaryPrompt};

/// Errors that can occur while obtaining a summary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The model API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Upstream {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Network or timeout failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The API answered 2xx but the body was not a usable completion
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The provider could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A backend that turns (already truncated) text into a summary
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Summarise `text` at the requested length
    ///
    /// One call is one upstream request. Implementations do not retry.
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, LlmError>;

    /// Identifier of the model answering requests
    fn model_name(&self) -> &str;
}

/// Mock provider for deterministic testing
///
/// Returns a fixed summary (or a fixed error) without any network access and
/// records every prompt it is asked to send.
///
/// # Examples
///
/// ```
/// use textgist_llm::{LlmError, MockProvider};
///
/// let provider = MockProvider::new("Fixed summary");
/// assert_eq!(provider.call_count(), 0);
///
/// let failing = MockProvider::failing(LlmError::Upstream {
///     status: 429,
///     body: "rate limited".to_string(),
/// });
/// assert!(failing.last_prompt().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    outcome: Result<String, LlmError>,
    model: String,
    call_count: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<SummaryPrompt>>>,
}

impl MockProvider {
    /// Create a mock that always answers with `summary`
    pub fn new(summary: impl Into<String>) -> Self {
        Self::with_outcome(Ok(summary.into()))
    }

    /// Create a mock that always fails with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, LlmError>) -> Self {
        Self {
            outcome,
            model: "mock-model".to_string(),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of times `summarize` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The prompt built for the most recent call
    pub fn last_prompt(&self) -> Option<SummaryPrompt> {
        self.last_prompt.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock summary")
    }
}

#[async_trait]
impl SummaryProvider for MockProvider {
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let prompt = PromptBuilder::new(text, length).build(&self.model);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt);
        }

        self.outcome.clone()
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_fixed_summary() {
        let provider = MockProvider::new("Test summary");
        let result = provider.summarize("some text", SummaryLength::Medium).await;
        assert_eq!(result.unwrap(), "Test summary");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::default();
        assert_eq!(provider.call_count(), 0);

        provider.summarize("one", SummaryLength::Short).await.unwrap();
        provider.summarize("two", SummaryLength::Long).await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_provider_records_prompt() {
        let provider = MockProvider::default();
        provider.summarize("fox text", SummaryLength::Short).await.unwrap();

        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.system().contains("2-3 sentences"));
        assert!(prompt.user().ends_with("fox text"));
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let provider = MockProvider::failing(LlmError::Communication("down".to_string()));
        let result = provider.summarize("text", SummaryLength::Medium).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("x");
        let provider2 = provider1.clone();

        provider1.summarize("text", SummaryLength::Medium).await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_upstream_error_display() {
        let err = LlmError::Upstream {
            status: 429,
            body: "{\"error\":\"rate limited\"}".to_string(),
        };
        assert_eq!(err.to_string(), "API returned 429: {\"error\":\"rate limited\"}");
    }
}
