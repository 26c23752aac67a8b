//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for fetching a web page (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum time for a single page fetch (seconds)
    pub fetch_timeout_secs: u64,

    /// `User-Agent` sent when fetching pages
    pub user_agent: String,
}

impl ExtractorConfig {
    /// Get the fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: concat!("textgist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
