//! spanlift Extractor
//!
//! Converts unstructured text into labeled spans using an LLM.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → LlmProvider → parser → aligner → AnnotatedDocument
//! ```
//!
//! The extractor renders the task description, the few-shot examples, and the
//! input text into one prompt, sends it to the provider in a single attempt,
//! parses the JSON the model returns, and aligns each extracted span back to
//! a character interval in the source text.
//!
//! # Example Usage
//!
//! ```no_run
//! use spanlift_extractor::{Extractor, ExtractorConfig, ExtractionRequest};
//! use spanlift_llm::MockProvider;
//! use spanlift_domain::{ExampleData, Extraction};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"extractions": []}"#);
//! let extractor = Extractor::new(provider, ExtractorConfig::default());
//!
//! let request = ExtractionRequest {
//!     text: "John Smith attended the Tech Conference.".to_string(),
//!     prompt_description: "Extract people and events.".to_string(),
//!     examples: vec![ExampleData::new(
//!         "Alice hosted the Expo.",
//!         vec![
//!             Extraction::new("person", "Alice"),
//!             Extraction::new("event", "Expo"),
//!         ],
//!     )],
//! };
//!
//! let document = extractor.extract(request).await?;
//! println!("Extracted {} spans", document.extractions.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod align;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;

pub use align::align_extractions;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{derive_document_id, ExtractionRequest, Extractor};
pub use prompt::PromptBuilder;
