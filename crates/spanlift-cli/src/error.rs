//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Every variant is fatal and maps to exit code 1; visualization failures are
/// handled inline as warnings and never reach this type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input path does not exist
    #[error("input file '{0}' not found")]
    InputNotFound(String),

    /// The input file could not be read or decoded
    #[error("failed to read input file: {0}")]
    Read(String),

    /// The examples file could not be loaded
    #[error("invalid examples file: {0}")]
    Examples(String),

    /// The configuration file could not be loaded or failed validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The extraction call failed
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// The extraction results could not be persisted
    #[error("failed to save results: {0}")]
    Write(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
