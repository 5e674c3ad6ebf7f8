//! CLI subcommands.

pub mod ask;
pub mod config_cmd;
pub mod doctor;
pub mod plan;

use wayfinder_config::AppConfig;

/// Load configuration and fail early with setup instructions when no API
/// key is available — before any network call is attempted.
pub(crate) fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    OPENAI_API_KEY       (for OpenAI direct)");
        eprintln!("    OPENROUTER_API_KEY   (for OpenRouter)");
        eprintln!("    WAYFINDER_API_KEY    (generic)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    Ok(config)
}
