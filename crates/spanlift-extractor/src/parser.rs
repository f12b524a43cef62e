//! Parse LLM output into extractions

use crate::error::ExtractorError;
use serde_json::Value;
use spanlift_domain::Extraction;
use std::collections::BTreeMap;
use tracing::warn;

/// Parse an LLM JSON response into extractions
///
/// Accepts either a bare JSON array of span objects or an object carrying an
/// `extractions` array. Items missing required fields are skipped with a
/// warning rather than failing the whole response.
pub fn parse_llm_response(response: &str) -> Result<Vec<Extraction>, ExtractorError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let items = match &json {
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => obj
            .get("extractions")
            .and_then(|v| v.as_array())
            .map(|a| a.as_slice())
            .ok_or_else(|| {
                ExtractorError::InvalidFormat(
                    "Expected a JSON array or an object with an 'extractions' array".to_string(),
                )
            })?,
        _ => {
            return Err(ExtractorError::InvalidFormat(
                "Expected a JSON array or object".to_string(),
            ))
        }
    };

    let mut extractions = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        match parse_extraction_json(item) {
            Ok(extraction) => extractions.push(extraction),
            Err(e) => {
                warn!("Skipping extraction {}: {}", idx, e);
            }
        }
    }

    Ok(extractions)
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence (``` or ```json) and the closing fence
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a single extraction from JSON
fn parse_extraction_json(json: &Value) -> Result<Extraction, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Extraction is not a JSON object".to_string())?;

    let extraction_class = obj
        .get("extraction_class")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'extraction_class'".to_string())?;

    let extraction_text = obj
        .get("extraction_text")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'extraction_text'".to_string())?;

    if extraction_class.is_empty() {
        return Err("'extraction_class' is empty".to_string());
    }
    if extraction_text.is_empty() {
        return Err("'extraction_text' is empty".to_string());
    }

    let mut extraction = Extraction::new(extraction_class, extraction_text);

    if let Some(attrs) = obj.get("attributes").and_then(|v| v.as_object()) {
        let attributes: BTreeMap<String, String> = attrs
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect();
        if !attributes.is_empty() {
            extraction = extraction.with_attributes(attributes);
        }
    }

    Ok(extraction)
}
