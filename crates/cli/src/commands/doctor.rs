//! `wayfinder doctor` — diagnose configuration and gateway health.

use wayfinder_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Checking Wayfinder health...");

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config loaded");
            config
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    };

    if config.has_api_key() {
        println!("   ✅ API key present");
    } else {
        println!("   ⚠️  No API key (set OPENAI_API_KEY or OPENROUTER_API_KEY)");
    }

    let registry = wayfinder_providers::build_from_config(&config);
    println!("   Gateways:  {}", registry.list().join(", "));
    println!("   Default:   {} ({})", config.default_provider, config.resolved_model());

    let Some(gateway) = registry.default() else {
        println!("   ❌ Default gateway not registered");
        return Ok(());
    };

    match gateway.health_check().await {
        Ok(true) => println!("   ✅ Gateway reachable"),
        Ok(false) => println!("   ❌ Gateway returned an error status"),
        Err(e) => println!("   ❌ Gateway unreachable: {e}"),
    }

    match gateway.list_models().await {
        Ok(models) if !models.is_empty() => {
            println!("   Models:    {} available", models.len());
        }
        Ok(_) => println!("   Models:    none listed"),
        Err(e) => println!("   ⚠️  Could not list models: {e}"),
    }

    Ok(())
}
