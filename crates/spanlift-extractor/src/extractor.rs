//! Core Extractor implementation

use crate::align::align_extractions;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use sha2::{Digest, Sha256};
use spanlift_domain::{AnnotatedDocument, ExampleData, LlmProvider};
use tokio::time::timeout;
use tracing::{debug, info};

/// Request to extract labeled spans from text
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Text to extract spans from
    pub text: String,

    /// Natural-language description of what to extract
    pub prompt_description: String,

    /// Few-shot examples steering the model
    pub examples: Vec<ExampleData>,
}

/// The Extractor converts unstructured text into an annotated document
pub struct Extractor<L>
where
    L: LlmProvider,
{
    provider: L,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider + Send + Sync,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(provider: L, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Extract labeled spans from text
    ///
    /// One request yields one annotated document. The provider is called
    /// exactly once; any failure is returned to the caller without retry.
    pub async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<AnnotatedDocument, ExtractorError> {
        let text_chars = request.text.chars().count();
        if text_chars > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                text_chars,
                self.config.max_text_length,
            ));
        }

        info!(
            "Starting extraction with model '{}', text length {} chars, {} examples",
            self.config.model_id,
            text_chars,
            request.examples.len()
        );

        let prompt = PromptBuilder::new(request.prompt_description, request.text.clone())
            .with_examples(request.examples)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(
            self.config.extraction_timeout(),
            self.provider.generate(&prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)?
        .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", response.len());

        let mut extractions = parse_llm_response(&response)?;
        align_extractions(&request.text, &mut extractions);

        info!("Extraction complete: {} spans", extractions.len());

        Ok(AnnotatedDocument::new(
            derive_document_id(&request.text),
            request.text,
            extractions,
        ))
    }
}

/// Derive a stable document id from the text content
///
/// Content-derived ids keep reruns of the same input byte-identical on disk.
pub fn derive_document_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut id = String::from("doc_");
    for byte in &digest[..5] {
        id.push_str(&format!("{:02x}", byte));
    }
    id
}
