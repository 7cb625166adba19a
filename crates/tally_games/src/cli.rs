//! Command-line interface for tally_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally Games - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tally_games")]
#[command(about = "Two-player tic-tac-toe with a running win tally", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Path to the config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "tally_games.toml")]
        config: PathBuf,

        /// Symbol option to start with (see the `symbols` command)
        #[arg(short, long)]
        option: Option<usize>,

        /// Write logs here instead of the configured log file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List the symbol pairs offered by the selectors
    Symbols {
        /// Path to the config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "tally_games.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["tally_games", "play"]).unwrap();
        match cli.command {
            Command::Play {
                config,
                option,
                log_file,
            } => {
                assert_eq!(config, PathBuf::from("tally_games.toml"));
                assert_eq!(option, None);
                assert_eq!(log_file, None);
            }
            Command::Symbols { .. } => panic!("expected play"),
        }
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from([
            "tally_games",
            "play",
            "--config",
            "custom.toml",
            "--option",
            "2",
            "--log-file",
            "out.log",
        ])
        .unwrap();
        let Command::Play {
            config,
            option,
            log_file,
        } = cli.command
        else {
            panic!("expected play");
        };
        assert_eq!(config, PathBuf::from("custom.toml"));
        assert_eq!(option, Some(2));
        assert_eq!(log_file, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
