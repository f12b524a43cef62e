//! Annotated documents produced by extraction

use crate::extraction::Extraction;
use serde::{Deserialize, Serialize};

/// The result of extraction: the original text plus the ordered list of
/// labeled spans extracted from it.
///
/// One input document yields exactly one `AnnotatedDocument`. The id is
/// assigned by the extractor and is derived from the text content, so the
/// same input always carries the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Stable identifier for the document
    pub document_id: String,

    /// The original source text
    pub text: String,

    /// Extractions in the order the model returned them
    pub extractions: Vec<Extraction>,
}

impl AnnotatedDocument {
    /// Create a new annotated document
    pub fn new(
        document_id: impl Into<String>,
        text: impl Into<String>,
        extractions: Vec<Extraction>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            text: text.into(),
            extractions,
        }
    }

    /// Whether the document carries any extracted spans
    pub fn has_extractions(&self) -> bool {
        !self.extractions.is_empty()
    }
}
