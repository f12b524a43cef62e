//! Line-delimited JSON persistence for annotated documents

use crate::error::IoError;
use spanlift_domain::AnnotatedDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the record file nested inside the output directory
pub const RECORDS_FILE_NAME: &str = "data.jsonl";

/// Persist annotated documents as line-delimited JSON.
///
/// `output_path` is materialized as a directory containing a `data.jsonl`
/// file, one JSON object per line per document. Returns the nested record
/// path; downstream consumers (the visualizer) must use the returned path
/// rather than `output_path` itself.
///
/// Serialization is deterministic: the same documents always produce
/// byte-identical records.
pub fn save_annotated_documents(
    documents: &[AnnotatedDocument],
    output_path: &Path,
) -> Result<PathBuf, IoError> {
    fs::create_dir_all(output_path)?;

    let mut records = String::new();
    for document in documents {
        records.push_str(&serde_json::to_string(document)?);
        records.push('\n');
    }

    let records_path = output_path.join(RECORDS_FILE_NAME);
    fs::write(&records_path, records)?;
    Ok(records_path)
}

/// Load annotated documents from a line-delimited JSON record file
pub fn load_annotated_documents(records_path: &Path) -> Result<Vec<AnnotatedDocument>, IoError> {
    let contents = fs::read_to_string(records_path)?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(IoError::from))
        .collect()
}
