//! Parsers for scoreboard input.
//!
//! - **Replay scripts**: one scoreboard command per line, see [`script`]
//!
//! ## Commands
//!
//! | Command | Fields |
//! |---------|--------|
//! | `start`   | home, away |
//! | `update`  | home, away, home score, away score |
//! | `finish`  | home, away |
//! | `summary` | none |
//!
//! Fields are separated by commas; surrounding whitespace is ignored.

pub mod script;
