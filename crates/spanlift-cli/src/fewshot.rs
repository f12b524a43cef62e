//! Few-shot example sets supplied to the extractor.

use crate::error::{CliError, Result};
use spanlift_domain::{ExampleData, Extraction};
use std::fs;
use std::path::Path;

/// The compiled-in default example set.
///
/// Generic person/event/location/date guidance; swap it out with
/// `load_examples` for domain- or language-specific extraction.
pub fn default_examples() -> Vec<ExampleData> {
    vec![ExampleData::new(
        "John Smith attended the Tech Conference in Tokyo on January 15, 2023.",
        vec![
            Extraction::new("person", "John Smith"),
            Extraction::new("event", "Tech Conference"),
            Extraction::new("location", "Tokyo"),
            Extraction::new("date", "January 15, 2023"),
        ],
    )]
}

/// Load an example set from a JSON file.
///
/// The file holds an array of `{"text": ..., "extractions": [...]}` records
/// in the same shape the records on disk use.
pub fn load_examples(path: &Path) -> Result<Vec<ExampleData>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::Examples(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::Examples(format!("{}: {}", path.display(), e)))
}
