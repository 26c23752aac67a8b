//! Configuration file parsing for the summarization server.
//!
//! Loads settings from TOML files including bind address, CORS origins,
//! fetch timeout, and the chat-completion API connection. The API key is
//! never read from the file; it comes from the environment.

use serde::Deserialize;
use std::path::Path;
use textgist_extractor::{ExtractorConfig, DEFAULT_FETCH_TIMEOUT_SECS};
use textgist_llm::openrouter::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE,
};
use textgist_llm::OpenRouterConfig;
use thiserror::Error;

/// Environment variable holding the chat-completion API key
pub const API_KEY_ENV: &str = "CHATBOT_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// API key missing from the environment
    #[error("CHATBOT_API_KEY environment variable is not set")]
    MissingApiKey,

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,

    /// Web page fetch timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Largest accepted request body (uploads included), in bytes
    pub max_body_bytes: usize,

    /// Chat-completion API settings
    pub llm: LlmSettings,
}

/// `[llm]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Full chat-completions URL
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Model call timeout in seconds
    pub timeout_secs: u64,

    /// `HTTP-Referer` attribution header
    pub referer: String,

    /// `X-Title` attribution header
    pub title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            allowed_origins: vec![
                "http://localhost".to_string(),
                "http://localhost:8501".to_string(),
            ],
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_body_bytes: 20 * 1024 * 1024,
            llm: LlmSettings::default(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        LlmSettings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "fetch_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::Invalid(
                "allowed_origins must list at least one origin".to_string(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_body_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Extractor settings derived from this configuration
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            fetch_timeout_secs: self.fetch_timeout_secs,
            ..ExtractorConfig::default()
        }
    }

    /// Chat-completion client settings for `api_key`
    pub fn openrouter_config(&self, api_key: impl Into<String>) -> OpenRouterConfig {
        OpenRouterConfig {
            api_key: api_key.into(),
            endpoint: self.llm.endpoint.clone(),
            model: self.llm.model.clone(),
            timeout_secs: self.llm.timeout_secs,
            referer: self.llm.referer.clone(),
            title: self.llm.title.clone(),
        }
    }
}

/// Read the API key from the process environment
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

/// Accept `value` as an API key unless it is missing or blank
pub fn api_key_from(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey),
    }
}
