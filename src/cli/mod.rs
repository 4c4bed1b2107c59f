//! Command-line interface for live-scoreboard.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **replay**: Apply a script of scoreboard commands and print the summary
//! - **normalize**: Show how team names are canonicalized
//!
//! ## Usage
//!
//! ```text
//! # Replay a script
//! live-scoreboard replay day_one.txt
//!
//! # Pipe a script in
//! printf 'start Uruguay, Panama\nupdate Uruguay, Panama, 2, 0\n' | live-scoreboard replay -
//!
//! # JSON output for scripting
//! live-scoreboard replay day_one.txt --format json
//!
//! # Check how names will be matched
//! live-scoreboard normalize "united-states of america"
//! ```

use clap::{Parser, Subcommand};

pub mod normalize;
pub mod replay;

#[derive(Parser)]
#[command(name = "live-scoreboard")]
#[command(version)]
#[command(about = "Track football matches in progress and rank them")]
#[command(
    long_about = "live-scoreboard keeps an in-memory board of the matches currently being played.\n\nMatches are started, updated, and finished by name; the summary ranks them by total score, most recently started first on ties."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a script of scoreboard commands
    Replay(replay::ReplayArgs),

    /// Print the normalized form of team names
    Normalize(normalize::NormalizeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
