//! Command-line options for the console game.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version)]
pub struct Cli {
    /// Directory for the daily-rolling JSON log file
    #[arg(long, default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Most verbose level written to the log (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}
