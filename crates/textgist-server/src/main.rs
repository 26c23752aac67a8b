//! TextGist Server binary
//!
//! Starts the summarization HTTP server.

use std::env;
use std::process;
use textgist_server::config::{api_key_from_env, ServerConfig};
use textgist_server::{start_server, ServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using defaults");
        ServerConfig::default()
    };

    // Refuse to start without credentials
    let api_key = api_key_from_env()?;

    start_server(config, api_key).await
}

fn print_help() {
    println!("TextGist Server - Text, document and web page summarization");
    println!();
    println!("USAGE:");
    println!("    textgist-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    CHATBOT_API_KEY    Chat-completion API key (required)");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8000)");
    println!("    - allowed_origins: Browser origins allowed by CORS");
    println!("    - fetch_timeout_secs: Web page fetch timeout (default: 30)");
    println!("    - max_body_bytes: Largest accepted request body");
    println!("    - [llm] endpoint, model, timeout_secs, referer, title");
    println!();
    println!("EXAMPLE:");
    println!("    textgist-server --config config/server.toml");
    println!();
}
