//! `wayfinder ask` — one-shot chat completion without schema constraints.

use wayfinder_core::error::GatewayError;
use wayfinder_core::gateway::CompletionRequest;

pub async fn run(message: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;

    let registry = wayfinder_providers::build_from_config(&config);
    let gateway = registry
        .default()
        .ok_or_else(|| GatewayError::NotConfigured(config.default_provider.clone()))?;

    let prompt = format!("You are a helpful assistant.\n\n{message}");
    let request = CompletionRequest::new(config.resolved_model(), prompt)
        .with_temperature(config.default_temperature)
        .with_max_tokens(config.default_max_tokens);

    eprint!("  Thinking...");
    let response = gateway.complete(request).await?;
    eprint!("\r              \r");
    println!("{}", response.text);

    Ok(())
}
