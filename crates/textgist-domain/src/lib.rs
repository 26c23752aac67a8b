//! TextGist Domain Layer
//!
//! Core value types shared by every TextGist crate. Like the rest of the
//! domain layer it has no external dependencies: parsing, HTTP and model
//! access all live in the infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **InputSource**: exactly one of pasted text, an uploaded document, or a URL
//! - **SummaryLength**: the length preset that selects the model directive
//! - **Truncation**: the fixed character budget applied before the model call
//!
//! ## Lifecycle
//!
//! Every value here lives for a single request. Nothing is persisted and
//! nothing is shared between requests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod length;
pub mod request;
pub mod text;

// Re-exports for convenience
pub use length::SummaryLength;
pub use request::{InputSource, NoInputProvided, SummaryRequest, UploadedFile};
pub use text::{truncate_chars, MAX_INPUT_CHARS};
