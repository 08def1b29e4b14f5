//! # gateway-probe - smoke test for an OpenAI-compatible gateway
//!
//! Lists the gateway's models grouped by provider, then sends a short chat
//! completion to a representative few and prints a pass/fail summary.
//!
//! ## Modes
//! - Default: full smoke test
//! - `models`: listing only
//! - `completions <shell>`: shell completion script

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

use cli::{Args, Commands};

/// Main application entry point.
///
/// # Errors
/// An invalid timeout setting prints a message and exits with status 1. Gateway
/// failures, including a rejected or missing key, are reported on stdout and
/// never change the exit status.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        run::print_completions(*shell);
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(args.config_overrides()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match &args.command {
        Some(Commands::Models { query }) => run::run_models(config, query.as_deref()).await?,
        Some(Commands::Completions { .. }) => {}
        None => {
            run::run_smoke_test(config, &args.models).await?;
        }
    }
    Ok(())
}
