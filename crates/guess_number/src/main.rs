//! Guess the Number - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use guess_number::{Console, GameConfig, RandomSecrets, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();
    run(cli)
}

/// Runs one session on stdin/stdout.
#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let secrets = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded secrets");
            RandomSecrets::seeded(seed)
        }
        None => RandomSecrets::from_entropy(),
    };

    let mut console = Console::stdio();
    let summary = Session::new(config, secrets).run(&mut console)?;
    info!(?summary, "Exiting");
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the game.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
