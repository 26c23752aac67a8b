//! Presentation state for one summary.

use serde::Serialize;

/// What the CLI shows after a successful request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// The summary as returned by the server
    pub summary: String,
    /// Whitespace-separated words in the summary
    pub word_count: usize,
}

impl SummaryView {
    /// Derive the view from a summary
    pub fn new(summary: impl Into<String>) -> Self {
        let summary = summary.into();
        let word_count = summary.split_whitespace().count();
        Self {
            summary,
            word_count,
        }
    }
}
