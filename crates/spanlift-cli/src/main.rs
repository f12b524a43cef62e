//! spanlift - extract structured spans from a text file with a hosted LLM.

use clap::Parser;
use spanlift_cli::{pipeline, Cli, CliError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = pipeline::run(&cli).await {
        eprintln!("Error: {}", e);
        if matches!(e, CliError::Extraction(_)) {
            eprintln!();
            eprintln!("Troubleshooting:");
            eprintln!("  1. Check that GEMINI_API_KEY or GOOGLE_API_KEY is set correctly");
            eprintln!("  2. If the input text is very long, retry with a shorter file");
            eprintln!("  3. Check your network connection");
        }
        std::process::exit(1);
    }
}
