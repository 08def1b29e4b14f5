//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::config::Overrides;

const AFTER_HELP: &str = "\
EXAMPLES:
  gateway-probe                              List models, then probe a representative few
  gateway-probe -m gpt-4o -m o1              Probe exactly these models
  gateway-probe --base-url http://host:8317/v1
  gateway-probe models --query claude        List and group models only
  gateway-probe completions bash             Generate bash completions

ENVIRONMENT:
  GATEWAY_BASE_URL, GATEWAY_API_KEY, GATEWAY_PROBE_MESSAGE,
  GATEWAY_LIST_TIMEOUT_SECS, GATEWAY_PROBE_TIMEOUT_SECS (a .env file is read too)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Smoke test for an OpenAI-compatible chat completion gateway",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gateway base URL, including the API prefix (e.g. http://host:8317/v1)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer key sent on every request
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Model to probe instead of the built-in selection (repeatable)
    #[arg(short = 'm', long = "model", value_name = "ID")]
    pub models: Vec<String>,

    /// Message sent in each probe
    #[arg(long)]
    pub message: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and group available models without probing
    Models {
        /// Filter models by id
        #[arg(long)]
        query: Option<String>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    pub fn config_overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            probe_message: self.message.clone(),
        }
    }
}
