//! OpenAI-compatible gateway implementation.
//!
//! Works with: OpenAI, OpenRouter, Ollama, vLLM, Together AI, Fireworks AI,
//! and any endpoint exposing an OpenAI-compatible `/v1/chat/completions`.
//!
//! The rendered prompt travels as a single user message; schema constraints
//! are already baked into the prompt text by the pipeline.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use wayfinder_core::error::GatewayError;
use wayfinder_core::gateway::{
    CompletionGateway, CompletionRequest, CompletionResponse, Usage,
};

/// An OpenAI-compatible completion gateway.
pub struct OpenAiCompatGateway {
    name: String,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatGateway {
    /// Create a new OpenAI-compatible gateway.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create an OpenAI gateway (convenience constructor).
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::new("openai", "https://api.openai.com/v1", api_key)
    }

    /// Create an OpenRouter gateway (convenience constructor).
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1", api_key)
    }

    /// Create an Ollama gateway (convenience constructor).
    pub fn ollama(base_url: Option<&str>) -> Self {
        Self::new(
            "ollama",
            base_url.unwrap_or("http://localhost:11434/v1"),
            "ollama", // Ollama doesn't need a real key
        )
    }

    /// Build the chat-completions request body.
    fn request_body(request: &CompletionRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": request.model,
            "messages": [{ "role": "user", "content": request.prompt }],
            "temperature": request.temperature,
            "stream": false,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        body
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompatGateway {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<CompletionResponse, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = Self::request_body(&request);

        debug!(gateway = %self.name, model = %request.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(e.to_string())
                } else {
                    GatewayError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(GatewayError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(GatewayError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status == 404 {
            return Err(GatewayError::ModelNotFound(request.model.clone()));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Gateway returned error");
            return Err(GatewayError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| GatewayError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::ApiError {
                status_code: 200,
                message: "No choices in response".into(),
            })?;

        let usage = api_response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(CompletionResponse {
            text: choice.message.content.unwrap_or_default(),
            model: api_response.model,
            usage,
        })
    }

    async fn list_models(&self) -> std::result::Result<Vec<String>, GatewayError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(Vec::new());
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let models = body["data"]
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|m| m["id"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }

    async fn health_check(&self) -> std::result::Result<bool, GatewayError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Deserialize)]
struct ApiResponse {
    model: String,
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_constructor() {
        let gateway = OpenAiCompatGateway::openai("sk-test");
        assert_eq!(gateway.name(), "openai");
        assert!(gateway.base_url.contains("api.openai.com"));
    }

    #[test]
    fn ollama_constructor() {
        let gateway = OpenAiCompatGateway::ollama(None);
        assert_eq!(gateway.name(), "ollama");
        assert!(gateway.base_url.contains("localhost:11434"));
    }

    #[test]
    fn trailing_slash_stripped_from_base_url() {
        let gateway = OpenAiCompatGateway::new("custom", "https://example.com/v1/", "key");
        assert_eq!(gateway.base_url, "https://example.com/v1");
    }

    #[test]
    fn request_body_shape() {
        let request = CompletionRequest::new("gpt-4o-mini", "Plan a trip to Rome")
            .with_temperature(0.7);
        let body = OpenAiCompatGateway::request_body(&request);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Plan a trip to Rome");
        assert_eq!(body["stream"], false);
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn request_body_includes_max_tokens_when_set() {
        let request = CompletionRequest::new("gpt-4o-mini", "hi").with_max_tokens(256);
        let body = OpenAiCompatGateway::request_body(&request);
        assert_eq!(body["max_tokens"], 256);
    }

    #[test]
    fn parse_api_response() {
        let data = r#"{
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "{\"destination\": \"Rome\"}"}}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 12, "total_tokens": 32}
        }"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.model, "gpt-4o-mini");
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("{\"destination\": \"Rome\"}")
        );
        assert_eq!(parsed.usage.unwrap().total_tokens, 32);
    }

    #[test]
    fn parse_api_response_without_usage() {
        let data = r#"{"model": "m", "choices": [{"message": {"content": "ok"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.usage.is_none());
    }
}
