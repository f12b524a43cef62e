//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction pipeline and
//! infrastructure. Provider implementations live in `spanlift-llm`.

use async_trait::async_trait;

/// Trait for LLM provider operations
///
/// A provider turns a fully rendered prompt into model output. The extractor
/// treats the provider as opaque: prompt in, text out, one attempt per call.
#[async_trait]
pub trait LlmProvider {
    /// Error type for provider operations
    type Error;

    /// Generate a text completion for the prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
