//! Wayfinder CLI — the main entry point.
//!
//! Commands:
//! - `ask`    — One-shot chat completion, no schema constraints
//! - `plan`   — Run a query through the structured pipeline
//! - `config` — Show or initialize configuration
//! - `doctor` — Diagnose configuration and gateway health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "wayfinder",
    about = "Wayfinder — schema-validated travel completions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the model a free-form question
    Ask {
        /// The message to send
        message: String,
    },

    /// Run a travel query through the structured pipeline
    Plan(commands::plan::PlanArgs),

    /// Show or initialize configuration
    Config {
        /// Write a default config file instead of showing the current one
        #[arg(long)]
        init: bool,
    },

    /// Diagnose configuration and gateway health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Ask { message } => commands::ask::run(message).await?,
        Commands::Plan(args) => commands::plan::run(args).await?,
        Commands::Config { init } => commands::config_cmd::run(init).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
