//! Application run modes: logger init, full smoke test, models listing, completions.

use std::io;

use chrono::Local;
use clap::CommandFactory;
use clap_complete::Shell;
use log::info;

use crate::cli::{self, Args};
use crate::core::app;
use crate::core::config::Config;
use crate::core::gateway::{GatewayClient, GatewayError};
use crate::core::models::{self, Model, ProviderGroups};
use crate::core::probe::{self, ProbeResult};
use crate::core::report;

/// Initialize env_logger on stderr so log records never mix with the stdout report.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Fetch `/models` and print the grouped listing. Any failure is reported and yields an empty list.
async fn fetch_and_print_models(client: &GatewayClient, query: Option<&str>) -> Vec<Model> {
    println!("{}", report::separator("Model list"));
    match client.list_models().await {
        Ok(listed) => {
            let shown = match query {
                Some(q) => models::filter_models(&listed, q),
                None => listed.clone(),
            };
            println!(
                "{}",
                report::model_list(&ProviderGroups::from_models(&shown), shown.len())
            );
            listed
        }
        Err(e) => {
            println!("{}", report::model_list_failed(&e));
            Vec::new()
        }
    }
}

/// Full run: banner, listing, probe selection, sequential probes, summary.
/// Returns the probe results (empty when the gateway listed no models).
pub async fn run_smoke_test(
    config: Config,
    explicit_models: &[String],
) -> Result<Vec<ProbeResult>, GatewayError> {
    let client = GatewayClient::new(config)?;
    println!("{}", report::banner(client.config(), Local::now()));

    let listed = fetch_and_print_models(&client, None).await;
    if listed.is_empty() {
        println!("{}", report::no_models());
        return Ok(Vec::new());
    }

    println!("{}", report::separator("Model availability"));
    let probe_set = if explicit_models.is_empty() {
        models::select_probe_set(&models::model_ids(&listed))
    } else {
        explicit_models.to_vec()
    };
    info!("probing {} of {} listed models", probe_set.len(), listed.len());
    println!("{}", report::probe_plan(&probe_set));

    let message = client.config().probe_message.clone();
    let timeout = client.config().probe_timeout;
    let mut results = Vec::with_capacity(probe_set.len());
    for model_id in &probe_set {
        println!("{}", report::probe_started(model_id));
        let result = probe::probe_model(&client, model_id, &message).await;
        println!("{}", report::probe_finished(&result, timeout));
        results.push(result);
    }

    println!("{}", report::separator("Summary"));
    println!("{}", report::summary(&results));
    println!("{}", report::finished());
    Ok(results)
}

/// `models` subcommand: listing only, optionally filtered by id.
pub async fn run_models(config: Config, query: Option<&str>) -> Result<(), GatewayError> {
    let client = GatewayClient::new(config)?;
    let listed = fetch_and_print_models(&client, query).await;
    if listed.is_empty() {
        println!("{}", report::no_models());
    }
    Ok(())
}

/// `completions` subcommand: write the completion script to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
}
