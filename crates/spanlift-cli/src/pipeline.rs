//! The extraction pipeline: read → extract → save → visualize → summarize.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::fewshot::{default_examples, load_examples};
use crate::output::{Formatter, NO_RESULTS_PLACEHOLDER};
use spanlift_domain::{AnnotatedDocument, LlmProvider};
use spanlift_extractor::{ExtractionRequest, Extractor, ExtractorConfig};
use spanlift_io::{save_annotated_documents, visualize};
use spanlift_llm::GeminiProvider;
use std::fs;
use std::path::Path;

/// Run the pipeline with the hosted Gemini provider.
///
/// The provider is constructed only after the input file has been read, so
/// input errors are reported before credential errors.
pub async fn run(cli: &Cli) -> Result<()> {
    run_with(cli, |model| {
        GeminiProvider::from_env(model).map_err(|e| CliError::Extraction(e.to_string()))
    })
    .await
}

/// Run the pipeline with a caller-supplied provider factory.
///
/// Strictly linear: each step either succeeds and feeds the next, or aborts
/// the run. The one exception is visualization, which degrades to a warning.
pub async fn run_with<L, F>(cli: &Cli, make_provider: F) -> Result<()>
where
    L: LlmProvider + Send + Sync,
    L::Error: std::fmt::Display,
    F: FnOnce(&str) -> Result<L>,
{
    let formatter = Formatter::new(!cli.no_color);

    let input_text = read_input(&cli.input_file)?;
    println!("Input file: {}", cli.input_file.display());
    println!("Text length: {} characters", input_text.chars().count());
    println!("{}", "-".repeat(50));

    let examples = match &cli.examples {
        Some(path) => load_examples(path)?,
        None => default_examples(),
    };

    println!("Starting extraction...");
    let config = build_config(cli)?;
    let provider = make_provider(&config.model_id)?;
    let extractor = Extractor::new(provider, config);

    let request = ExtractionRequest {
        text: input_text,
        prompt_description: cli.prompt.clone(),
        examples,
    };
    let document = extractor
        .extract(request)
        .await
        .map_err(|e| CliError::Extraction(e.to_string()))?;

    let records_path = save_annotated_documents(&[document.clone()], &cli.output)
        .map_err(|e| CliError::Write(e.to_string()))?;
    println!(
        "{}",
        formatter.success(&format!(
            "Saved extraction results to '{}'",
            cli.output.display()
        ))
    );

    // The records land in a data.jsonl nested inside the output directory;
    // the report is rendered from that nested path. Failure here is a
    // warning, not an abort.
    match write_report(&records_path, &cli.html) {
        Ok(()) => println!(
            "{}",
            formatter.success(&format!(
                "Generated HTML visualization at '{}'",
                cli.html.display()
            ))
        ),
        Err(e) => println!(
            "{}",
            formatter.warning(&format!("failed to generate HTML visualization: {}", e))
        ),
    }

    println!();
    println!("Extracted information:");
    println!("{}", "-".repeat(50));
    for line in summary_lines(&document) {
        println!("{}", line);
    }

    Ok(())
}

/// Resolve the extractor configuration from the config file and flags.
///
/// `--model` wins over the file's `model_id`; omitted settings take the
/// built-in defaults. The resolved configuration is validated before use.
pub fn build_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
            ExtractorConfig::from_toml(&contents)
                .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?
        }
        None => ExtractorConfig::default(),
    };
    if let Some(model) = &cli.model {
        config = config.with_model_id(model);
    }
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Read the input file, distinguishing a missing path from a read failure.
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::InputNotFound(path.display().to_string()),
        _ => CliError::Read(format!("{}: {}", path.display(), e)),
    })
}

/// One summary line per extracted span, or the placeholder when there are none.
pub fn summary_lines(document: &AnnotatedDocument) -> Vec<String> {
    if !document.has_extractions() {
        return vec![NO_RESULTS_PLACEHOLDER.to_string()];
    }
    document
        .extractions
        .iter()
        .map(|extraction| {
            format!(
                "- {}: {}",
                extraction.extraction_class, extraction.extraction_text
            )
        })
        .collect()
}

fn write_report(records_path: &Path, html_path: &Path) -> std::result::Result<(), String> {
    let html = visualize(records_path).map_err(|e| e.to_string())?;
    fs::write(html_path, html).map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanlift_domain::Extraction;
    use spanlift_llm::MockProvider;
    use std::io::Write;
    use std::path::PathBuf;

    const SPAN_RESPONSE: &str = r#"{"extractions": [
        {"extraction_class": "person", "extraction_text": "John Smith"},
        {"extraction_class": "location", "extraction_text": "Tokyo"}
    ]}"#;

    fn test_cli(input_file: PathBuf, output: PathBuf, html: PathBuf) -> Cli {
        Cli {
            input_file,
            model: None,
            prompt: "Extract people and locations.".to_string(),
            examples: None,
            config: None,
            output,
            html,
            no_color: true,
        }
    }

    #[test]
    fn test_read_input_missing_path_names_path() {
        let result = read_input(Path::new("/nonexistent/input.txt"));
        match result {
            Err(CliError::InputNotFound(path)) => {
                assert!(path.contains("/nonexistent/input.txt"));
            }
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_input_directory_is_read_error() {
        // Exists but cannot be read as a file: a Read error, not InputNotFound
        let dir = tempfile::tempdir().unwrap();
        let result = read_input(dir.path());
        assert!(matches!(result, Err(CliError::Read(_))));
    }

    #[test]
    fn test_read_input_invalid_utf8_is_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let result = read_input(file.path());
        assert!(matches!(result, Err(CliError::Read(_))));
    }

    #[test]
    fn test_read_input_reports_exact_char_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "日本語abc").unwrap();

        let text = read_input(file.path()).unwrap();
        assert_eq!(text.chars().count(), 6);
    }

    #[test]
    fn test_summary_lines_one_per_span_in_order() {
        let document = AnnotatedDocument::new(
            "doc_x",
            "John Smith flew to Tokyo.",
            vec![
                Extraction::new("person", "John Smith"),
                Extraction::new("location", "Tokyo"),
            ],
        );

        let lines = summary_lines(&document);
        assert_eq!(
            lines,
            vec!["- person: John Smith", "- location: Tokyo"]
        );
    }

    #[test]
    fn test_summary_lines_placeholder_when_empty() {
        let document = AnnotatedDocument::new("doc_x", "Nothing here.", vec![]);
        assert_eq!(summary_lines(&document), vec![NO_RESULTS_PLACEHOLDER]);
    }

    #[test]
    fn test_build_config_model_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("spanlift.toml");
        fs::write(&config_path, r#"model_id = "from-file""#).unwrap();

        let mut cli = test_cli(
            dir.path().join("input.txt"),
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );
        assert_eq!(build_config(&cli).unwrap().model_id, "gemini-2.5-flash");

        cli.config = Some(config_path);
        assert_eq!(build_config(&cli).unwrap().model_id, "from-file");

        cli.model = Some("from-flag".to_string());
        assert_eq!(build_config(&cli).unwrap().model_id, "from-flag");
    }

    #[test]
    fn test_build_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("spanlift.toml");
        fs::write(&config_path, "extraction_timeout_secs = 0").unwrap();

        let mut cli = test_cli(
            dir.path().join("input.txt"),
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );
        cli.config = Some(config_path);

        let result = build_config(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_build_config_missing_file_is_config_error() {
        let mut cli = test_cli(
            PathBuf::from("input.txt"),
            PathBuf::from("output.jsonl"),
            PathBuf::from("visualization.html"),
        );
        cli.config = Some(PathBuf::from("/nonexistent/spanlift.toml"));

        let result = build_config(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[tokio::test]
    async fn test_run_honors_config_file_length_limit() {
        let dir = tempfile::tempdir().unwrap();
        let input_file = dir.path().join("input.txt");
        fs::write(&input_file, "John Smith flew to Tokyo.").unwrap();
        let config_path = dir.path().join("spanlift.toml");
        fs::write(&config_path, "max_text_length = 5").unwrap();

        let mut cli = test_cli(
            input_file,
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );
        cli.config = Some(config_path);

        let result = run_with(&cli, |_| Ok(MockProvider::new(SPAN_RESPONSE))).await;
        assert!(matches!(result, Err(CliError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_run_builds_provider_with_resolved_model() {
        let dir = tempfile::tempdir().unwrap();
        let input_file = dir.path().join("input.txt");
        fs::write(&input_file, "John Smith flew to Tokyo.").unwrap();
        let config_path = dir.path().join("spanlift.toml");
        fs::write(&config_path, r#"model_id = "from-file""#).unwrap();

        let mut cli = test_cli(
            input_file,
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );
        cli.config = Some(config_path);

        run_with(&cli, |model| {
            assert_eq!(model, "from-file");
            Ok(MockProvider::new(SPAN_RESPONSE))
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_run_writes_records_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let input_file = dir.path().join("input.txt");
        fs::write(&input_file, "John Smith flew to Tokyo.").unwrap();

        let cli = test_cli(
            input_file,
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );

        run_with(&cli, |_| Ok(MockProvider::new(SPAN_RESPONSE)))
            .await
            .unwrap();

        let records_path = cli.output.join("data.jsonl");
        let records = fs::read_to_string(&records_path).unwrap();
        assert!(!records.is_empty());
        assert!(records.contains("John Smith"));

        let html = fs::read_to_string(&cli.html).unwrap();
        assert!(html.contains("Tokyo"));
    }

    #[tokio::test]
    async fn test_run_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input_file = dir.path().join("input.txt");
        fs::write(&input_file, "John Smith flew to Tokyo.").unwrap();

        let cli = test_cli(
            input_file,
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );

        run_with(&cli, |_| Ok(MockProvider::new(SPAN_RESPONSE)))
            .await
            .unwrap();
        let first = fs::read(cli.output.join("data.jsonl")).unwrap();

        run_with(&cli, |_| Ok(MockProvider::new(SPAN_RESPONSE)))
            .await
            .unwrap();
        let second = fs::read(cli.output.join("data.jsonl")).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_run_survives_visualization_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input_file = dir.path().join("input.txt");
        fs::write(&input_file, "John Smith flew to Tokyo.").unwrap();

        // Unwritable report destination: the parent directory does not exist
        let cli = test_cli(
            input_file,
            dir.path().join("output.jsonl"),
            dir.path().join("no_such_dir").join("visualization.html"),
        );

        let result = run_with(&cli, |_| Ok(MockProvider::new(SPAN_RESPONSE))).await;
        assert!(result.is_ok());

        // The records were still persisted and are non-empty
        let records = fs::read_to_string(cli.output.join("data.jsonl")).unwrap();
        assert!(!records.is_empty());
    }

    #[tokio::test]
    async fn test_run_provider_error_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let input_file = dir.path().join("input.txt");
        fs::write(&input_file, "Some text.").unwrap();

        let cli = test_cli(
            input_file,
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );

        let result = run_with(&cli, |_| {
            Ok(MockProvider::new("not json at all"))
        })
        .await;
        assert!(matches!(result, Err(CliError::Extraction(_))));
    }

    #[tokio::test]
    async fn test_run_missing_input_never_calls_provider() {
        let dir = tempfile::tempdir().unwrap();
        let cli = test_cli(
            dir.path().join("missing.txt"),
            dir.path().join("output.jsonl"),
            dir.path().join("visualization.html"),
        );

        let result = run_with(&cli, |_| -> Result<MockProvider> {
            panic!("provider must not be constructed for a missing input")
        })
        .await;
        assert!(matches!(result, Err(CliError::InputNotFound(_))));
    }
}
