//! spanlift LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `spanlift-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Hosted Gemini API integration
//!
//! # Examples
//!
//! ```
//! use spanlift_llm::MockProvider;
//! use spanlift_domain::LlmProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(
//!     r#"{"extractions": [{"extraction_class": "person", "extraction_text": "Ada"}]}"#,
//! );
//! let payload = provider.generate("Extract people: Ada wrote a memo.").await.unwrap();
//! assert!(payload.contains("Ada"));
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use spanlift_domain::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API credential available in the environment
    #[error("Missing API credential: {0}")]
    MissingCredential(String),

    /// The credential was rejected by the service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Scripted reply for one prompt.
#[derive(Debug, Clone)]
enum Reply {
    Payload(String),
    Outage(String),
}

/// Deterministic provider for testing the extraction pipeline offline.
///
/// Hands back canned extraction payloads without any network calls. Prompts
/// can be scripted individually; everything else gets the fallback payload.
///
/// # Examples
///
/// ```
/// use spanlift_llm::MockProvider;
/// use spanlift_domain::LlmProvider;
///
/// # async fn example() {
/// let mut provider = MockProvider::default();
/// provider.respond_to(
///     "Extract locations: We met in Kyoto.",
///     r#"{"extractions": [{"extraction_class": "location", "extraction_text": "Kyoto"}]}"#,
/// );
///
/// let payload = provider.generate("Extract locations: We met in Kyoto.").await.unwrap();
/// assert!(payload.contains("Kyoto"));
///
/// // Unscripted prompts fall back to an empty extraction set
/// let payload = provider.generate("anything else").await.unwrap();
/// assert!(payload.contains("\"extractions\": []"));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    fallback: String,
    scripted: Arc<Mutex<HashMap<String, Reply>>>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a provider that answers every prompt with the same payload
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            fallback: payload.into(),
            scripted: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Script the payload returned for one exact prompt
    pub fn respond_to(&mut self, prompt: impl Into<String>, payload: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(prompt.into(), Reply::Payload(payload.into()));
    }

    /// Script a service failure for one exact prompt
    pub fn fail_on(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(prompt.into(), Reply::Outage(message.into()));
    }

    /// Number of `generate` calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    /// A provider whose fallback payload carries no extractions
    fn default() -> Self {
        Self::new(r#"{"extractions": []}"#)
    }
}

#[async_trait]
impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scripted = self.scripted.lock().unwrap();
        match scripted.get(prompt) {
            Some(Reply::Payload(payload)) => Ok(payload.clone()),
            Some(Reply::Outage(message)) => Err(LlmError::Communication(message.clone())),
            None => Ok(self.fallback.clone()),
        }
    }
}
