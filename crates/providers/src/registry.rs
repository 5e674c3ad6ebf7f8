//! Gateway registry — selects the correct completion backend from config.

use crate::openai_compat::OpenAiCompatGateway;
use std::collections::HashMap;
use std::sync::Arc;
use wayfinder_core::gateway::CompletionGateway;

/// Holds the configured gateways by name.
pub struct GatewayRegistry {
    gateways: HashMap<String, Arc<dyn CompletionGateway>>,
    default_gateway: String,
}

impl GatewayRegistry {
    /// Create a new registry with a default gateway name.
    pub fn new(default_gateway: impl Into<String>) -> Self {
        Self {
            gateways: HashMap::new(),
            default_gateway: default_gateway.into(),
        }
    }

    /// Register a gateway.
    pub fn register(&mut self, name: impl Into<String>, gateway: Arc<dyn CompletionGateway>) {
        self.gateways.insert(name.into(), gateway);
    }

    /// Get the default gateway.
    pub fn default(&self) -> Option<Arc<dyn CompletionGateway>> {
        self.gateways.get(&self.default_gateway).cloned()
    }

    /// Get a specific gateway by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn CompletionGateway>> {
        self.gateways.get(name).cloned()
    }

    /// List all registered gateway names.
    pub fn list(&self) -> Vec<&str> {
        self.gateways.keys().map(|s| s.as_str()).collect()
    }
}

/// Build gateways from configuration.
pub fn build_from_config(config: &wayfinder_config::AppConfig) -> GatewayRegistry {
    let mut registry = GatewayRegistry::new(&config.default_provider);

    for (name, provider_config) in &config.providers {
        let api_key = provider_config
            .api_key
            .clone()
            .or_else(|| config.api_key.clone())
            .unwrap_or_default();

        let base_url = provider_config
            .api_url
            .clone()
            .unwrap_or_else(|| default_base_url(name));

        registry.register(
            name.clone(),
            Arc::new(OpenAiCompatGateway::new(name, &base_url, &api_key)),
        );
    }

    // Ensure the default gateway exists (even if not explicitly configured)
    if registry.get(&config.default_provider).is_none() {
        let api_key = config.api_key.clone().unwrap_or_default();
        let base_url = default_base_url(&config.default_provider);

        registry.register(
            config.default_provider.clone(),
            Arc::new(OpenAiCompatGateway::new(
                &config.default_provider,
                &base_url,
                &api_key,
            )),
        );
    }

    registry
}

/// Get the default base URL for well-known gateways.
fn default_base_url(gateway_name: &str) -> String {
    match gateway_name {
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "fireworks" => "https://api.fireworks.ai/inference/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        _ => format!("https://{gateway_name}.api.example.com/v1"),
    }
}
