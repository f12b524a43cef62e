//! Labeled spans and their alignment back to the source text

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A half-open character interval `[start_pos, end_pos)` into the source text.
///
/// Positions count Unicode scalar values, not bytes, so they remain stable
/// across serialization and match what a reader sees in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharInterval {
    /// First character of the span
    pub start_pos: usize,
    /// One past the last character of the span
    pub end_pos: usize,
}

impl CharInterval {
    /// Create a new interval
    pub fn new(start_pos: usize, end_pos: usize) -> Self {
        Self { start_pos, end_pos }
    }

    /// Number of characters covered by the interval
    pub fn len(&self) -> usize {
        self.end_pos.saturating_sub(self.start_pos)
    }

    /// Whether the interval covers no characters
    pub fn is_empty(&self) -> bool {
        self.end_pos <= self.start_pos
    }
}

/// How an extracted span was located in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStatus {
    /// The span text was found verbatim in the source
    MatchExact,
}

/// One labeled span: a class tag and the exact substring extracted.
///
/// `char_interval` and `alignment_status` are filled in by the aligner when
/// the span text can be located in the source; spans the model paraphrased
/// stay unaligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Class tag (free-form, e.g. "person", "event", "location", "date")
    pub extraction_class: String,

    /// The exact substring extracted
    pub extraction_text: String,

    /// Character interval of the span within the source text, if aligned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_interval: Option<CharInterval>,

    /// How the span was aligned, if at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment_status: Option<AlignmentStatus>,

    /// Optional free-form attributes attached by the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl Extraction {
    /// Create an unaligned extraction
    pub fn new(extraction_class: impl Into<String>, extraction_text: impl Into<String>) -> Self {
        Self {
            extraction_class: extraction_class.into(),
            extraction_text: extraction_text.into(),
            char_interval: None,
            alignment_status: None,
            attributes: None,
        }
    }

    /// Attach attributes to the extraction
    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_extraction_is_unaligned() {
        let extraction = Extraction::new("person", "John Smith");
        assert_eq!(extraction.extraction_class, "person");
        assert_eq!(extraction.extraction_text, "John Smith");
        assert!(extraction.char_interval.is_none());
        assert!(extraction.alignment_status.is_none());
    }

    #[test]
    fn test_char_interval_len() {
        let interval = CharInterval::new(3, 10);
        assert_eq!(interval.len(), 7);
        assert!(!interval.is_empty());

        let empty = CharInterval::new(5, 5);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut extraction = Extraction::new("date", "January 15, 2023");
        extraction.char_interval = Some(CharInterval::new(0, 16));
        extraction.alignment_status = Some(AlignmentStatus::MatchExact);

        let json = serde_json::to_string(&extraction).unwrap();
        assert!(json.contains("\"extraction_class\":\"date\""));
        assert!(json.contains("\"extraction_text\":\"January 15, 2023\""));
        assert!(json.contains("\"start_pos\":0"));
        assert!(json.contains("\"end_pos\":16"));
        assert!(json.contains("\"alignment_status\":\"match_exact\""));
    }

    #[test]
    fn test_optional_fields_absent_when_unaligned() {
        let extraction = Extraction::new("person", "Alice");
        let json = serde_json::to_string(&extraction).unwrap();
        assert!(!json.contains("char_interval"));
        assert!(!json.contains("alignment_status"));
        assert!(!json.contains("attributes"));

        // Round trip through the compact form
        let parsed: Extraction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, extraction);
    }
}
