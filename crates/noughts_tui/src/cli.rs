//! Command-line interface for the terminal frontend.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal, with history navigation
#[derive(Parser, Debug)]
#[command(name = "noughts_tui")]
#[command(about = "Terminal tic-tac-toe with move-history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path for the log file (the alternate screen owns stdout)
    #[arg(long, default_value = "noughts_tui.log")]
    pub log_file: PathBuf,
}
