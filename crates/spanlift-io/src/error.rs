//! Error types for persistence and visualization

use thiserror::Error;

/// Errors that can occur while persisting or rendering annotated documents
#[derive(Error, Debug)]
pub enum IoError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTML template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}
