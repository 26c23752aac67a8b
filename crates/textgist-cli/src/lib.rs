//! TextGist CLI library.
//!
//! Submits text, a document, or a web page to a TextGist server and renders
//! the returned summary.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod view;

pub use cli::{Cli, CliFormat, LengthArg};
pub use client::SummaryClient;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
pub use view::SummaryView;
