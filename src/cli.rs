use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calctui - A four-function calculator for the terminal
#[derive(Parser)]
#[command(name = "calctui")]
#[command(about = "A four-function terminal calculator with history and themes")]
#[command(version)]
pub struct Cli {
    /// Directory for history and preference files (defaults to the
    /// platform data directory).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the saved calculation history
    History {
        /// Delete all saved history entries instead of printing them
        #[arg(long)]
        clear: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["calctui"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_cli_history_command() {
        let result = Cli::try_parse_from(["calctui", "history"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::History { clear }) => assert!(!clear),
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_cli_history_clear() {
        let result = Cli::try_parse_from(["calctui", "history", "--clear"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::History { clear }) => assert!(clear),
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_cli_data_dir_is_global() {
        let result = Cli::try_parse_from(["calctui", "history", "--data-dir", "/tmp/calc"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert_eq!(cli.data_dir.unwrap().to_str().unwrap(), "/tmp/calc");
    }
}
