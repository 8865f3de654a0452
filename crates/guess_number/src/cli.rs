//! Command-line interface for guess_number.

use clap::Parser;

/// Guess the Number - a console guessing game
#[derive(Parser, Debug)]
#[command(name = "guess_number")]
#[command(about = "Guess the secret number before your attempts run out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the range, attempt budget or answer words
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for the secret generator (reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,
}
