//! OpenRouter Provider Implementation
//!
//! Sends summary prompts to OpenRouter's OpenAI-compatible chat-completions
//! endpoint.
//!
//! # Behaviour
//!
//! - One non-streaming POST per summary, bearer-token authenticated
//! - Hard request timeout (60 seconds by default)
//! - No retries: a failed call is a failed request
//! - Non-2xx answers keep the upstream status and body
//!
//! # Examples
//!
//! ```no_run
//! use textgist_llm::{OpenRouterConfig, OpenRouterProvider};
//!
//! let config = OpenRouterConfig::new("sk-or-...");
//! let provider = OpenRouterProvider::new(config).unwrap();
//! ```

use crate::prompt::PromptBuilder;
use crate::{LlmError, SummaryProvider};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use textgist_domain::SummaryLength;
use tracing::{debug, warn};

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-8b-instruct:free";

/// Default timeout for a summary request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default attribution referer sent to OpenRouter
pub const DEFAULT_REFERER: &str = "https://textgist.vercel.app";

/// Default attribution title sent to OpenRouter
pub const DEFAULT_TITLE: &str = "TextGist Summarizer";

/// Connection settings for `OpenRouterProvider`
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// Bearer token
    pub api_key: String,
    /// Full chat-completions URL
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the `HTTP-Referer` attribution header
    pub referer: String,
    /// Value of the `X-Title` attribution header
    pub title: String,
}

impl OpenRouterConfig {
    /// Settings with every default except the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Point the provider at a different endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

/// Chat-completions provider backed by OpenRouter
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: reqwest::Client,
}

/// Response body of the chat-completions API (only the fields we read)
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenRouterProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the HTTP client cannot be built.
    pub fn new(config: OpenRouterConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn send(&self, text: &str, length: SummaryLength) -> Result<String, LlmError> {
        let prompt = PromptBuilder::new(text, length).build(&self.config.model);

        debug!(
            "Sending summary request: model={}, length={}, text_chars={}",
            self.config.model,
            length,
            text.chars().count()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&prompt)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            warn!("Summary API returned HTTP {}: {}", status.as_u16(), body);
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                LlmError::InvalidResponse("Response contained no message content".to_string())
            })
    }
}

#[async_trait]
impl SummaryProvider for OpenRouterProvider {
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, LlmError> {
        self.send(text, length).await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenRouterConfig::new("key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.title, "TextGist Summarizer");
    }

    #[test]
    fn test_config_debug_hides_key() {
        let config = OpenRouterConfig::new("sk-secret-value");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret-value"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_provider_creation() {
        let config = OpenRouterConfig::new("key")
            .with_endpoint("http://localhost:9999/v1/chat/completions")
            .with_model("other/model")
            .with_timeout_secs(5);
        let provider = OpenRouterProvider::new(config).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9999/v1/chat/completions");
        assert_eq!(provider.model_name(), "other/model");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let config = OpenRouterConfig::new("key")
            .with_endpoint("http://127.0.0.1:1/v1/chat/completions")
            .with_timeout_secs(2);
        let provider = OpenRouterProvider::new(config).unwrap();

        let result = provider.summarize("text", SummaryLength::Medium).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
