//! `wayfinder config` — show or initialize configuration.

use wayfinder_config::AppConfig;

pub async fn run(init: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_dir().join("config.toml");

    if init {
        if config_path.exists() {
            return Err(format!(
                "Config file already exists at {} — refusing to overwrite",
                config_path.display()
            )
            .into());
        }
        std::fs::create_dir_all(AppConfig::config_dir())?;
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let config = AppConfig::load()?;

    println!();
    println!("  Config file: {}", config_path.display());
    if !config_path.exists() {
        println!("               (not present — using defaults)");
    }
    println!();
    println!("  Provider:    {}", config.default_provider);
    println!("  Model:       {}", config.resolved_model());
    println!("  Temperature: {} (guardrail: {})", config.default_temperature, config.guardrail_temperature);
    println!("  Max tokens:  {}", config.default_max_tokens);
    println!("  Timeout:     {}s", config.request_timeout_secs);
    println!(
        "  API key:     {}",
        if config.has_api_key() { "configured" } else { "missing" }
    );
    println!();

    Ok(())
}
