//! Uploaded document parsing (PDF and DOCX)

use crate::error::ExtractError;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use textgist_domain::UploadedFile;
use tracing::debug;

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// PDF files (.pdf)
    Pdf,
    /// Word documents (.docx)
    Docx,
}

impl DocumentFormat {
    /// Detect the format from the lowercased file extension
    ///
    /// Only the name is inspected; the bytes are never looked at, so an
    /// unsupported upload is rejected before any parser runs.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = UploadedFile::new(filename, Vec::new()).extension();
        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractError::UnsupportedFormat(extension)),
        }
    }

    /// Parse `bytes` as this format
    pub fn read(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        match self {
            DocumentFormat::Pdf => read_pdf(bytes),
            DocumentFormat::Docx => read_docx(bytes),
        }
    }
}

/// Concatenate the text of every page
///
/// A page whose text cannot be extracted contributes an empty string; only a
/// document that cannot be opened at all is an error.
pub fn read_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExtractError::ParseFailure(format!("PDF extraction error: {}", e)))?;

    let mut text = String::new();
    for (page_number, _) in document.get_pages() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!("Skipping unreadable PDF page {}: {}", page_number, e),
        }
    }

    Ok(text)
}

/// Join the text of the body's top-level paragraphs with newlines
pub fn read_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractError::ParseFailure(format!("Word document parsing error: {}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(&paragraph.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(DocumentFormat::from_filename("a.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("A.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("b.Docx").unwrap(), DocumentFormat::Docx);
    }

    #[test]
    fn test_unsupported_formats() {
        for name in ["notes.txt", "old.doc", "archive.pdf.zip", "noextension", ""] {
            assert!(
                matches!(
                    DocumentFormat::from_filename(name),
                    Err(ExtractError::UnsupportedFormat(_))
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let bytes = build_docx(&["First paragraph.", "Second paragraph."]);
        let text = read_docx(&bytes).unwrap();
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn test_invalid_docx_is_parse_failure() {
        let result = read_docx(b"definitely not a zip archive");
        assert!(matches!(result, Err(ExtractError::ParseFailure(_))));
    }

    #[test]
    fn test_invalid_pdf_is_parse_failure() {
        let result = read_pdf(b"not a pdf");
        assert!(matches!(result, Err(ExtractError::ParseFailure(_))));
    }
}
