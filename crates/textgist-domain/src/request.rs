//! Request module - the validated summary request
//!
//! Raw form submissions carry three optional inputs. Only one of them is
//! used, chosen with a fixed precedence: text, then file, then URL.

use crate::length::SummaryLength;
use std::fmt;

/// A document uploaded by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original file name, used to pick the parser
    pub filename: String,

    /// Raw document bytes
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create a new uploaded file
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Whether the upload carries anything at all
    ///
    /// Browsers submit an empty part with an empty file name when no file
    /// was chosen; that counts as absent.
    pub fn is_present(&self) -> bool {
        !self.filename.is_empty() || !self.bytes.is_empty()
    }

    /// Lowercased text after the last `.` of the file name
    pub fn extension(&self) -> String {
        self.filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// The single input a request is summarised from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Pasted text, used verbatim
    Text(String),

    /// An uploaded PDF or DOCX document
    File(UploadedFile),

    /// A web page to fetch
    Url(String),
}

impl InputSource {
    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::Text(_) => "text",
            InputSource::File(_) => "file",
            InputSource::Url(_) => "url",
        }
    }
}

/// Returned when none of text, file or URL carries content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoInputProvided;

impl fmt::Display for NoInputProvided {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("No input provided. Please provide text, upload a file, or enter a URL.")
    }
}

impl std::error::Error for NoInputProvided {}

/// A validated summary request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// The chosen input
    pub source: InputSource,

    /// Requested summary length
    pub length: SummaryLength,
}

impl SummaryRequest {
    /// Create a request from an already chosen source
    pub fn new(source: InputSource, length: SummaryLength) -> Self {
        Self { source, length }
    }

    /// Build a request from the raw optional form fields
    ///
    /// Text counts when it is non-empty after trimming and is then passed on
    /// untrimmed. A file counts when it is present. A URL counts when it is
    /// non-empty after trimming and is passed on trimmed. The first one that
    /// counts, in the order text > file > url, wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use textgist_domain::{InputSource, SummaryLength, SummaryRequest};
    ///
    /// let request = SummaryRequest::from_fields(
    ///     Some("  hello  ".to_string()),
    ///     None,
    ///     Some("https://example.com".to_string()),
    ///     SummaryLength::Short,
    /// )
    /// .unwrap();
    /// assert_eq!(request.source, InputSource::Text("  hello  ".to_string()));
    /// ```
    pub fn from_fields(
        text: Option<String>,
        file: Option<UploadedFile>,
        url: Option<String>,
        length: SummaryLength,
    ) -> Result<Self, NoInputProvided> {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            return Ok(Self::new(InputSource::Text(text), length));
        }

        if let Some(file) = file.filter(UploadedFile::is_present) {
            return Ok(Self::new(InputSource::File(file), length));
        }

        if let Some(url) = url {
            let url = url.trim();
            if !url.is_empty() {
                return Ok(Self::new(InputSource::Url(url.to_string()), length));
            }
        }

        Err(NoInputProvided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> UploadedFile {
        UploadedFile::new("report.pdf", b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_no_input() {
        let result = SummaryRequest::from_fields(None, None, None, SummaryLength::Medium);
        assert_eq!(result, Err(NoInputProvided));
    }

    #[test]
    fn test_blank_inputs_count_as_missing() {
        let result = SummaryRequest::from_fields(
            Some("   \n\t".to_string()),
            Some(UploadedFile::new("", Vec::new())),
            Some("  ".to_string()),
            SummaryLength::Medium,
        );
        assert_eq!(result, Err(NoInputProvided));
    }

    #[test]
    fn test_text_wins_over_file_and_url() {
        let request = SummaryRequest::from_fields(
            Some("body".to_string()),
            Some(pdf()),
            Some("https://example.com".to_string()),
            SummaryLength::Long,
        )
        .unwrap();
        assert_eq!(request.source, InputSource::Text("body".to_string()));
        assert_eq!(request.length, SummaryLength::Long);
    }

    #[test]
    fn test_file_wins_over_url() {
        let request = SummaryRequest::from_fields(
            Some(" ".to_string()),
            Some(pdf()),
            Some("https://example.com".to_string()),
            SummaryLength::Medium,
        )
        .unwrap();
        assert_eq!(request.source, InputSource::File(pdf()));
    }

    #[test]
    fn test_url_is_trimmed() {
        let request = SummaryRequest::from_fields(
            None,
            None,
            Some("  https://example.com/article \n".to_string()),
            SummaryLength::Medium,
        )
        .unwrap();
        assert_eq!(
            request.source,
            InputSource::Url("https://example.com/article".to_string())
        );
        assert_eq!(request.source.kind(), "url");
    }

    #[test]
    fn test_extension_is_lowercased_last_segment() {
        assert_eq!(UploadedFile::new("Report.PDF", Vec::new()).extension(), "pdf");
        assert_eq!(UploadedFile::new("a.b.DocX", Vec::new()).extension(), "docx");
        assert_eq!(UploadedFile::new("README", Vec::new()).extension(), "readme");
    }
}
