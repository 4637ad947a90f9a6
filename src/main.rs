//! Rewind - unified CLI
//!
//! Interactive terminal play or headless script replay.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{GameController, RewindConfig, apply_script, parse_script, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => {
            init_file_tracing(&config)?;
            run_tui(&config)
        }
        Command::Replay { script, json } => {
            init_stderr_tracing(&config);
            run_replay(&script, json)
        }
    }
}

/// Logs to the configured file so output does not corrupt the TUI.
fn init_file_tracing(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_tracing(config: &RewindConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Applies a move script to a fresh game and prints the result.
#[instrument]
fn run_replay(script: &str, json: bool) -> Result<()> {
    let actions = parse_script(script)?;
    let mut controller = GameController::new();
    let report = apply_script(&mut controller, &actions);
    info!(
        accepted = report.accepted(),
        absorbed = report.absorbed(),
        "Script applied"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&controller.view())?);
    } else {
        println!("{}", controller.text_summary());
        println!(
            "\n{} accepted, {} absorbed",
            report.accepted(),
            report.absorbed()
        );
    }
    Ok(())
}
