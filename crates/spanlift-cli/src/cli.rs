//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Default natural-language description of what to extract
pub const DEFAULT_PROMPT: &str =
    "Extract people, events, locations, and dates from the text.";

/// Extract structured spans from a text file using a hosted LLM.
#[derive(Debug, Parser)]
#[command(name = "spanlift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the UTF-8 text file to extract from
    pub input_file: PathBuf,

    /// Model identifier, overriding the config file [default: gemini-2.5-flash]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Natural-language description of what to extract
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// JSON file with few-shot examples (defaults to a compiled-in set)
    #[arg(short, long)]
    pub examples: Option<PathBuf>,

    /// TOML file with extractor settings (model id, length limit, timeout)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Record destination (materialized as a directory holding data.jsonl)
    #[arg(short, long, default_value = "output.jsonl")]
    pub output: PathBuf,

    /// Path for the HTML visualization
    #[arg(long, default_value = "visualization.html")]
    pub html: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_is_positional() {
        let cli = Cli::parse_from(["spanlift", "notes.txt"]);
        assert_eq!(cli.input_file, PathBuf::from("notes.txt"));
        assert_eq!(cli.prompt, DEFAULT_PROMPT);
        assert_eq!(cli.output, PathBuf::from("output.jsonl"));
        assert_eq!(cli.html, PathBuf::from("visualization.html"));
        assert!(cli.model.is_none());
        assert!(cli.examples.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let result = Cli::try_parse_from(["spanlift"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "spanlift",
            "notes.txt",
            "--model",
            "gemini-2.5-pro",
            "--examples",
            "examples.json",
            "--config",
            "spanlift.toml",
            "--no-color",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(cli.examples, Some(PathBuf::from("examples.json")));
        assert_eq!(cli.config, Some(PathBuf::from("spanlift.toml")));
        assert!(cli.no_color);
    }
}
