//! spanlift Domain Layer
//!
//! Core data model shared by every other crate in the workspace.
//!
//! ## Key Concepts
//!
//! - **Extraction**: one labeled span - a class tag and the exact substring
//!   it refers to, optionally aligned back to a character interval in the
//!   source text
//! - **ExampleData**: a few-shot example pair (text plus its expected
//!   extractions) supplied to steer the model
//! - **AnnotatedDocument**: the result of extraction - the original text plus
//!   the ordered list of spans extracted from it
//!
//! The serialized field names follow the JSONL record schema consumed by the
//! persistence and visualization layers (`extraction_class`,
//! `extraction_text`, `char_interval`, ...).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod example;
pub mod extraction;
pub mod traits;

// Re-exports for convenience
pub use document::AnnotatedDocument;
pub use example::ExampleData;
pub use extraction::{AlignmentStatus, CharInterval, Extraction};
pub use traits::LlmProvider;
