//! Gemini Provider Implementation
//!
//! Integration with the hosted Gemini `generateContent` API.
//!
//! The credential is read from the process environment (`GEMINI_API_KEY`,
//! falling back to `GOOGLE_API_KEY`), never from program arguments. Each call
//! makes exactly one request: failures surface immediately so the caller can
//! decide whether to abort.
//!
//! # Examples
//!
//! ```no_run
//! use spanlift_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::from_env("gemini-2.5-flash").unwrap();
//! ```

use crate::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spanlift_domain::LlmProvider as LlmProviderTrait;
use std::time::Duration;

/// Default Gemini API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout (120 seconds; extraction prompts can be large)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variables consulted for the API credential, in order
pub const CREDENTIAL_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Hosted Gemini API provider
pub struct GeminiProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an explicit API key
    ///
    /// # Parameters
    ///
    /// - `api_key`: API credential for the hosted service
    /// - `model`: Model identifier (e.g., "gemini-2.5-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a provider with the credential taken from the environment
    ///
    /// Consults `GEMINI_API_KEY`, then `GOOGLE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingCredential` when neither variable is set.
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = CREDENTIAL_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok())
            .ok_or_else(|| {
                LlmError::MissingCredential(format!(
                    "set one of {}",
                    CREDENTIAL_ENV_VARS.join(" or ")
                ))
            })?;
        Ok(Self::new(api_key, model))
    }

    /// Set a custom base URL (for proxies or test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the model identifier this provider targets
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "credential rejected".to_string());
            return Err(LlmError::Authentication(body));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, body)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Response contained no candidates".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.request(prompt).await
    }
}
