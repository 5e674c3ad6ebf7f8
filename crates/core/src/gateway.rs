//! CompletionGateway trait — the abstraction over hosted LLM backends.
//!
//! A gateway knows how to send one prompt to a model and return the raw
//! completion text. The pipeline calls `complete()` without knowing which
//! backend is configured — pure polymorphism.
//!
//! Implementations: OpenAI-compatible endpoints, mocks for tests.

use crate::error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model to use (e.g., "gpt-4o-mini").
    pub model: String,

    /// The fully rendered prompt.
    pub prompt: String,

    /// Sampling temperature. Valid range is 0.0–2.0.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    0.7
}

impl CompletionRequest {
    /// Create a request with the default temperature and no token cap.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// The raw text returned by a gateway for one prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text, exactly as the provider returned it.
    pub text: String,

    /// Which model actually responded (may differ from requested).
    pub model: String,

    /// Token usage statistics.
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The completion gateway trait.
///
/// Transport-level concerns (connection pooling, TLS, provider-side retry)
/// belong to the implementation; the pipeline only sequences calls and
/// interprets their results.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// A human-readable name for this gateway (e.g., "openai", "openrouter").
    fn name(&self) -> &str;

    /// Send a prompt and get the complete response text.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<CompletionResponse, GatewayError>;

    /// List available models for this gateway.
    async fn list_models(&self) -> std::result::Result<Vec<String>, GatewayError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the backend?
    async fn health_check(&self) -> std::result::Result<bool, GatewayError> {
        Ok(true)
    }
}
