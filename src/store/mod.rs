//! Storage of matches in progress.
//!
//! A store maps an unordered pair of normalized team names ([`key::PairKey`])
//! to at most one [`Match`], and answers "which match is this team playing
//! in?" through a secondary team index.
//!
//! The store does not enforce lifecycle rules; those belong to the
//! [`Scoreboard`](crate::scoreboard::service::Scoreboard). It only guarantees
//! that lookups with the same two names, in either order, reach the same entry.
//!
//! ## Example
//!
//! ```rust
//! use live_scoreboard::core::fixture::Match;
//! use live_scoreboard::core::team::TeamName;
//! use live_scoreboard::store::{InMemoryMatchStore, MatchStore};
//!
//! let uruguay = TeamName::normalize("uruguay");
//! let panama = TeamName::normalize("panama");
//!
//! let mut store = InMemoryMatchStore::new();
//! store.upsert(Match::new(uruguay.clone(), panama.clone(), chrono::Utc::now(), 0));
//!
//! assert!(store.get_by_pair(&panama, &uruguay).is_some());
//! assert!(store.get_by_team(&panama).is_some());
//! ```

pub mod key;
pub mod memory;

pub use key::PairKey;
pub use memory::InMemoryMatchStore;

use crate::core::fixture::Match;
use crate::core::team::TeamName;

/// Keyed collection of active matches.
///
/// Lookups hand out clones; the store remains the only owner of its values.
/// Implementations are single-owner: mutation takes `&mut self`, and a host
/// sharing a store across threads must wrap it in its own lock.
pub trait MatchStore {
    /// Insert, or replace the match already stored for the same pairing
    fn upsert(&mut self, fixture: Match);

    /// The match between these two teams, whichever side each plays
    fn get_by_pair(&self, a: &TeamName, b: &TeamName) -> Option<Match>;

    /// The match this team is playing in, home or away
    fn get_by_team(&self, team: &TeamName) -> Option<Match>;

    /// Every active match, in no particular order
    fn get_all(&self) -> Vec<Match>;

    /// Remove the match for this pairing; no-op when absent
    fn remove(&mut self, key: &PairKey) -> Option<Match>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
