//! Match lifecycle and the ranked summary.
//!
//! - [`Scoreboard`]: start, update, and finish matches; produce the summary
//! - [`ScoreboardError`]: why a call was rejected
//! - [`ranking`]: the summary ordering as pure functions over matches
//!
//! ## Lifecycle
//!
//! A pairing is absent until started, active until finished, and absent
//! again afterwards (a finished pairing may be started anew). A team can be
//! in at most one active match, and scores only ever go up.
//!
//! ## Summary Order
//!
//! 1. Total score, highest first
//! 2. Start time, most recent first
//! 3. Start order, most recent first (for starts within the same instant)
//!
//! ## Example
//!
//! ```rust
//! use live_scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! board.start_match("Uruguay", "Panama").unwrap();
//! board.update_score("uruguay", "panama", 2, 0).unwrap();
//!
//! assert_eq!(board.summary_text(), "1.Uruguay 2 - Panama 0");
//! ```

pub mod error;
pub mod ranking;
pub mod service;

pub use error::ScoreboardError;
pub use ranking::{RankedMatch, Summary};
pub use service::Scoreboard;
