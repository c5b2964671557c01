mod cli_args;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tsb_ns_client::{TsbClient, TsbClientConfig};
use tsb_ns_core::{run, RunOptions};

use crate::cli_args::Cli;

fn init_tracing(debug: bool) {
    let default_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let token = cli
        .token
        .clone()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| anyhow!("Missing TSB_TOKEN environment variable"))?;

    let client = TsbClient::new(TsbClientConfig {
        api_base: cli.resolved_api_base(),
        token,
        request_timeout_ms: cli.request_timeout_ms,
        insecure_skip_verify: cli.insecure_skip_verify,
    })
    .context("failed to create management API client")?;

    let output = run(
        &client,
        &RunOptions {
            organization: cli.org.clone(),
            tenant_failure_policy: cli.tenant_failure_policy.into(),
            format: cli.output.into(),
        },
    )
    .context("An error occurred")?;

    for diagnostic in &output.diagnostics {
        eprintln!("{diagnostic}");
    }
    print!("{}", output.report);
    Ok(())
}
