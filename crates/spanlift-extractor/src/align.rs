//! Align extracted spans back to character intervals in the source text

use spanlift_domain::{AlignmentStatus, CharInterval, Extraction};
use tracing::debug;

/// Locate each extraction's text in the source and record its character
/// interval.
///
/// Extractions are expected in source order, so the search advances a cursor
/// past each match. If a span is not found after the cursor (the model
/// reported it out of order, or the same substring repeats), the search falls
/// back to the beginning of the text. Spans that never match are left
/// unaligned.
pub fn align_extractions(text: &str, extractions: &mut [Extraction]) {
    let mut cursor = 0usize; // byte offset, always on a char boundary

    for extraction in extractions.iter_mut() {
        let needle = extraction.extraction_text.as_str();
        if needle.is_empty() {
            continue;
        }

        let found = text[cursor..]
            .find(needle)
            .map(|i| i + cursor)
            .or_else(|| text.find(needle));

        match found {
            Some(start) => {
                let end = start + needle.len();
                extraction.char_interval = Some(CharInterval::new(
                    char_offset(text, start),
                    char_offset(text, end),
                ));
                extraction.alignment_status = Some(AlignmentStatus::MatchExact);
                cursor = end;
            }
            None => {
                debug!(
                    "Could not align extraction '{}' to the source text",
                    needle
                );
            }
        }
    }
}

/// Convert a byte offset into a character offset
fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
