//! Core data types.
//!
//! - [`TeamName`]: normalized team identity
//! - [`Match`]: a match in progress, with its score and start time
//! - [`Clock`]: where start times come from
//!
//! ## Team Names
//!
//! Team names are compared only after normalization, so different spellings
//! of the same team collide:
//!
//! | Input | Normalized |
//! |-------|------------|
//! | `United-States of America` | `United States Of America` |
//! | ` united States-of-america` | `United States Of America` |
//! | `BOSNIA--herzegovina` | `Bosnia Herzegovina` |

pub mod clock;
pub mod fixture;
pub mod team;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fixture::Match;
pub use team::TeamName;
