//! Tally Games - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tally_games::{Cli, Command, TallyConfig, init_file_tracing, init_stderr_tracing, run_tui};
use tally_tictactoe::Player;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            option,
            log_file,
        } => {
            let mut config = TallyConfig::load_or_default(&config)?;
            if let Some(index) = option {
                config = config.with_initial_option(index);
            }
            if let Some(path) = log_file {
                config = config.with_log_file(path);
            }
            init_file_tracing(config.log_file(), config.log_filter())?;
            run_tui(&config)
        }
        Command::Symbols { config } => {
            let config = TallyConfig::load_or_default(&config)?;
            init_stderr_tracing(config.log_filter());
            list_symbols(&config)
        }
    }
}

/// Prints the yoked symbol pairs, one option per line.
#[instrument(skip(config))]
fn list_symbols(config: &TallyConfig) -> Result<()> {
    let selectors = config.selectors().context("Invalid configuration")?;
    info!(options = selectors.len(), "Listing symbol options");
    for (index, (one, two)) in selectors
        .options(Player::One)
        .iter()
        .zip(selectors.options(Player::Two))
        .enumerate()
    {
        let marker = if index == *config.initial_option() { "*" } else { " " };
        println!("{} {}: {} vs {}", marker, index, one, two);
    }
    Ok(())
}
