//! Few-shot example pairs

use crate::extraction::Extraction;
use serde::{Deserialize, Serialize};

/// A few-shot example: source text plus the extractions expected from it.
///
/// Example spans must be literal substrings of `text` so the model learns to
/// quote the source verbatim (the aligner depends on that). The invariant is
/// not enforced at runtime; callers own their example sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleData {
    /// Example source text
    pub text: String,

    /// Ordered extractions expected for the text
    pub extractions: Vec<Extraction>,
}

impl ExampleData {
    /// Create a new example pair
    pub fn new(text: impl Into<String>, extractions: Vec<Extraction>) -> Self {
        Self {
            text: text.into(),
            extractions,
        }
    }
}
