use std::io;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod input;
mod menu;
mod output;
mod session;

fn main() {
    if let Err(error) = run() {
        eprintln!("parklot error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let tariff = config
        .tariff
        .to_tariff()
        .context("invalid tariff configuration")?;
    let time_display = output::TimeDisplay::from_utc_flag(config.display.utc);
    tracing::debug!(
        hourly_rate = tariff.hourly_rate(),
        minimum_charge = tariff.minimum_charge(),
        currency = tariff.currency(),
        "tariff loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = session::Session::new(
        stdin.lock(),
        stdout.lock(),
        tariff,
        time_display,
        chrono::Utc::now,
    );
    session.run().context("terminal I/O failed")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PARKLOT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the menu transcript; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
