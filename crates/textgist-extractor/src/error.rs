//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while turning an input into plain text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is neither `pdf` nor `docx`
    #[error("Unsupported file type. Only PDF and DOCX are allowed.")]
    UnsupportedFormat(String),

    /// The document library could not read the payload
    #[error("Error reading file: {0}")]
    ParseFailure(String),

    /// The URL could not be retrieved, timed out, or answered non-2xx
    #[error("Failed to fetch URL: {0}")]
    FetchFailure(String),

    /// The page was retrieved but its content could not be processed
    #[error("Error processing URL content: {0}")]
    UrlProcessing(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractError {
    /// Whether the failure is the caller's fault rather than ours
    ///
    /// Unsupported uploads and unreachable URLs are client errors; unreadable
    /// documents and unprocessable pages are server errors.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::UnsupportedFormat(_) | ExtractError::FetchFailure(_)
        )
    }
}
