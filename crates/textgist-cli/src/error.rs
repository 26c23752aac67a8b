//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Nothing to summarize
    #[error("No input provided. Use --text, --file, --url, or pipe text on stdin.")]
    NoInput,

    /// The server rejected the request
    #[error("{detail} (HTTP {status})")]
    Server {
        /// HTTP status returned by the server
        status: u16,
        /// The server's `detail` message
        detail: String,
    },

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
