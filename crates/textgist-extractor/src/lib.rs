//! TextGist Extractor
//!
//! Converts one request input (pasted text, an uploaded document, or a web
//! page URL) into a single plain-text string.
//!
//! # Architecture
//!
//! ```text
//! Text ───────────────────────────────┐
//! File → DocumentFormat → lopdf/docx ─┼→ String
//! Url  → reqwest → scraper ───────────┘
//! ```
//!
//! # Key Features
//!
//! - **Format dispatch**: lowercased extension picks the parser; anything but
//!   `pdf` / `docx` is rejected before parsing
//! - **Page-tolerant PDFs**: unreadable pages contribute nothing instead of
//!   failing the document
//! - **Content-only HTML**: headings, paragraphs and list items, minus
//!   navigation chrome, scripts and styles
//! - **Bounded fetches**: page retrieval has a hard timeout and no retry
//!
//! # Example Usage
//!
//! ```no_run
//! use textgist_domain::InputSource;
//! use textgist_extractor::{ContentExtractor, ExtractorConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ContentExtractor::new(ExtractorConfig::default())?;
//! let text = extractor
//!     .extract(&InputSource::Url("https://example.com/article".to_string()))
//!     .await?;
//! println!("{} characters extracted", text.chars().count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod extractor;
mod html;

pub use config::{ExtractorConfig, DEFAULT_FETCH_TIMEOUT_SECS};
pub use document::{read_docx, read_pdf, DocumentFormat};
pub use error::ExtractError;
pub use extractor::ContentExtractor;
pub use html::{html_to_text, CONTENT_SELECTOR, EXCLUDED_ELEMENTS};
