use std::{io, process::ExitCode};

use acctdemo::{config::{CliArgs, Config, LoggingConfig}, driver::{run_demo, DemoOptions}};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);
    init_logging(&config.logging);

    tracing::debug!(config = ?config, "Configuration loaded");

    let options = DemoOptions { summary: config.report.summary };
    let stdout = io::stdout();
    let stderr = io::stderr();
    match run_demo(&mut stdout.lock(), &mut stderr.lock(), &options) {
        Ok(outcome) => {
            tracing::info!(
                savings = %outcome.savings.balance(),
                current = %outcome.current.balance(),
                "Walkthrough finished"
            );
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
