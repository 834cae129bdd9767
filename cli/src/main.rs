//! CLI entrypoint for Sortition Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod simulate;

use anyhow::{Context, Result};
use clap::Parser;
use council_infrastructure::{ConfigLoader, FileConfig};
use council_presentation::{Cli, Command};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting Sortition Council");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Simulate(args) => simulate::run(&config, args, cli.output).await,
        Command::ShowConfig => show_config(&cli, &config),
    }
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr; `--log-dir` adds a daily rolling file.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sortition-council.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Configuration files disabled (--no-config)");
    } else {
        ConfigLoader::print_config_sources(cli.config.as_ref());
    }
    println!();
    println!("Effective configuration:");
    println!(
        "{}",
        toml::to_string_pretty(config).context("Failed to render configuration")?
    );
    Ok(())
}
