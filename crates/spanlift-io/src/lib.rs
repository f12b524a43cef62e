//! spanlift I/O Layer
//!
//! Persistence and visualization for annotated documents.
//!
//! - `save_annotated_documents` / `load_annotated_documents`: line-delimited
//!   JSON records. The destination passed to the writer is materialized as a
//!   DIRECTORY containing a nested `data.jsonl` file; the writer returns the
//!   nested path and readers must use that path, not the name they passed in.
//! - `visualize`: renders a persisted record file as a standalone HTML report
//!   with the extracted spans highlighted in the source text.

#![warn(missing_docs)]

mod error;
mod jsonl;
mod visualize;

pub use error::IoError;
pub use jsonl::{load_annotated_documents, save_annotated_documents, RECORDS_FILE_NAME};
pub use visualize::visualize;
