//! # live-scoreboard
//!
//! An in-memory scoreboard for football matches in progress during a tournament.
//!
//! Matches are started, updated, and finished by team name. Names are
//! normalized first, so `"United-States of America"` and
//! `" united States-of-america"` are the same team. The summary ranks the
//! matches in progress by total score, most recently started first on ties.
//!
//! ## Rules
//!
//! - **No self-pairing**: a team cannot play against itself
//! - **One match per team**: a team already playing cannot start another match
//! - **No deductions**: scores never go down, and are never negative
//! - **Finish frees the teams**: a finished match leaves the board and its teams may play again
//!
//! ## Example
//!
//! ```rust
//! use live_scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! board.start_match("Uruguay", "Panama").unwrap();
//! board.start_match("Brazil", "Germany").unwrap();
//! board.update_score("Uruguay", "Panama", 2, 0).unwrap();
//! board.update_score("brazil", "GERMANY", 0, 8).unwrap();
//!
//! for line in board.summary().lines() {
//!     println!("{line}");
//! }
//! // 1.Brazil 0 - Germany 8
//! // 2.Uruguay 2 - Panama 0
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Team names, matches, and clocks
//! - [`store`]: Keyed storage of matches in progress
//! - [`scoreboard`]: Lifecycle rules and the ranked summary
//! - [`parsing`]: Parser for replay scripts
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod scoreboard;
pub mod store;

// Re-export commonly used types for convenience
pub use core::fixture::Match;
pub use core::team::TeamName;
pub use scoreboard::{RankedMatch, Scoreboard, ScoreboardError, Summary};
pub use store::{InMemoryMatchStore, MatchStore};
