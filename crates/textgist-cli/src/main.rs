//! TextGist CLI - Command-line client for the TextGist summarization server.

use clap::Parser;
use std::io::{IsTerminal, Read};
use std::time::Duration;
use textgist_cli::{Cli, Formatter, SummaryClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &Formatter) -> textgist_cli::Result<()> {
    let stdin = if cli.wants_stdin() {
        read_stdin(cli.text.as_deref() == Some("-"))?
    } else {
        None
    };

    let request = cli.to_request(stdin)?;
    let client = SummaryClient::new(&cli.server, Duration::from_secs(cli.timeout))?;
    let view = client.summarize(&request).await?;

    println!("{}", formatter.format_summary(&view)?);
    Ok(())
}

/// Read piped text; an interactive terminal is only read when asked for
fn read_stdin(explicit: bool) -> textgist_cli::Result<Option<String>> {
    let mut stdin = std::io::stdin();
    if !explicit && stdin.is_terminal() {
        return Ok(None);
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(Some(text))
}
