//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with full move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "rewind_games.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a move script and print the resulting position
    Replay {
        /// Clicks (0-8 or position labels) and jumps (@N), comma or space separated
        script: String,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["rewind_games", "replay", "4,0 @1", "--json"]);
        assert_eq!(cli.config, std::path::PathBuf::from("rewind_games.toml"));
        match cli.command {
            Command::Replay { script, json } => {
                assert_eq!(script, "4,0 @1");
                assert!(json);
            }
            Command::Play => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["rewind_games", "play", "--config", "alt.toml"]);
        assert_eq!(cli.config, std::path::PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Command::Play));
    }
}
