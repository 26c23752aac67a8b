//! CLI argument parsing and request assembly.

use crate::error::{CliError, Result};
use clap::Parser;
use std::path::PathBuf;
use textgist_domain::{SummaryLength, SummaryRequest, UploadedFile};

/// Default summarize endpoint
pub const DEFAULT_SERVER: &str = "http://localhost:8000/summarize";

/// TextGist CLI - Summarize text, PDF/DOCX documents, or web pages.
///
/// When several inputs are given, text wins over a file, and a file wins
/// over a URL.
#[derive(Debug, Parser)]
#[command(name = "textgist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text to summarize ("-" reads stdin)
    #[arg(short, long)]
    pub text: Option<String>,

    /// PDF or DOCX document to summarize
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Web page to summarize
    #[arg(short, long)]
    pub url: Option<String>,

    /// Summary length
    #[arg(short, long, value_enum, default_value = "medium")]
    pub length: LengthArg,

    /// Summarize endpoint of the TextGist server
    #[arg(short, long, env = "TEXTGIST_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "90")]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary with word count (default)
    Text,
    /// JSON object
    Json,
    /// Summary only
    Quiet,
}

/// Summary length argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LengthArg {
    /// Two or three sentences
    Short,
    /// Main points
    Medium,
    /// Main points with supporting details
    Long,
}

impl From<LengthArg> for SummaryLength {
    fn from(length: LengthArg) -> Self {
        match length {
            LengthArg::Short => SummaryLength::Short,
            LengthArg::Medium => SummaryLength::Medium,
            LengthArg::Long => SummaryLength::Long,
        }
    }
}

impl Cli {
    /// Whether text should be read from stdin
    pub fn wants_stdin(&self) -> bool {
        match self.text.as_deref() {
            Some("-") => true,
            Some(_) => false,
            None => self.file.is_none() && self.url.is_none(),
        }
    }

    /// Choose the single input to send
    ///
    /// `stdin` replaces `--text` when [`Cli::wants_stdin`] said so. The file
    /// is only read when no text is given. Nothing is sent when every input
    /// is blank.
    pub fn to_request(&self, stdin: Option<String>) -> Result<SummaryRequest> {
        let text = match self.text.as_deref() {
            Some("-") | None => stdin,
            Some(text) => Some(text.to_string()),
        };
        let has_text = text.as_deref().is_some_and(|t| !t.trim().is_empty());

        let file = match (&self.file, has_text) {
            (Some(path), false) => Some(read_upload(path)?),
            _ => None,
        };

        SummaryRequest::from_fields(text, file, self.url.clone(), self.length.into())
            .map_err(|_| CliError::NoInput)
    }
}

fn read_upload(path: &PathBuf) -> Result<UploadedFile> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::InvalidInput(format!("Not a file path: {}", path.display())))?;
    let bytes = std::fs::read(path)?;
    Ok(UploadedFile::new(filename, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use textgist_domain::InputSource;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["textgist", "--text", "hello"]).unwrap();
        assert_eq!(cli.length, LengthArg::Medium);
        assert_eq!(cli.timeout, 90);
        assert_eq!(cli.format, CliFormat::Text);
        assert!(!cli.wants_stdin());
    }

    #[test]
    fn test_length_values() {
        let cli = Cli::try_parse_from(["textgist", "-t", "x", "--length", "short"]).unwrap();
        assert_eq!(SummaryLength::from(cli.length), SummaryLength::Short);
        assert!(Cli::try_parse_from(["textgist", "-t", "x", "--length", "huge"]).is_err());
    }

    #[test]
    fn test_stdin_when_no_input_flags() {
        let cli = Cli::try_parse_from(["textgist"]).unwrap();
        assert!(cli.wants_stdin());

        let cli = Cli::try_parse_from(["textgist", "--text", "-"]).unwrap();
        assert!(cli.wants_stdin());

        let cli = Cli::try_parse_from(["textgist", "--url", "https://example.com"]).unwrap();
        assert!(!cli.wants_stdin());
    }

    #[test]
    fn test_text_wins_and_file_is_not_read() {
        let cli = Cli::try_parse_from([
            "textgist",
            "--text",
            "Pasted text",
            "--file",
            "/definitely/missing.pdf",
            "--url",
            "https://example.com",
        ])
        .unwrap();

        let request = cli.to_request(None).unwrap();
        assert_eq!(request.source, InputSource::Text("Pasted text".to_string()));
    }

    #[test]
    fn test_file_wins_over_url() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"PK fake docx").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli =
            Cli::try_parse_from(["textgist", "--file", &path, "--url", "https://example.com"])
                .unwrap();

        match cli.to_request(None).unwrap().source {
            InputSource::File(upload) => {
                assert!(upload.filename.ends_with(".docx"));
                assert_eq!(upload.bytes, b"PK fake docx".to_vec());
            }
            other => panic!("Expected file input, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_input_refused() {
        let cli = Cli::try_parse_from(["textgist", "--url", "   "]).unwrap();
        assert!(matches!(cli.to_request(None), Err(CliError::NoInput)));

        let cli = Cli::try_parse_from(["textgist"]).unwrap();
        assert!(matches!(
            cli.to_request(Some("\n\n".to_string())),
            Err(CliError::NoInput)
        ));
    }

    #[test]
    fn test_stdin_text_used() {
        let cli = Cli::try_parse_from(["textgist", "--text", "-"]).unwrap();
        let request = cli.to_request(Some("from a pipe".to_string())).unwrap();
        assert_eq!(request.source, InputSource::Text("from a pipe".to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let cli = Cli::try_parse_from(["textgist", "--file", "/definitely/missing.pdf"]).unwrap();
        assert!(matches!(cli.to_request(None), Err(CliError::Io(_))));
    }
}
