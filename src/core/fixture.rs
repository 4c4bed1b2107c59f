use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::team::TeamName;
use crate::store::key::PairKey;

/// A match in progress.
///
/// Values are never edited in place: a score change produces a new `Match`
/// through [`Match::with_scores`] that keeps the teams, start time and start
/// sequence of the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub home_score: u32,
    pub away_score: u32,

    /// When the match was started; breaks ties in the summary
    pub started_at: DateTime<Utc>,

    /// Start order within the owning scoreboard, for starts within the same instant
    pub sequence: u64,
}

impl Match {
    /// A freshly started match at 0-0
    pub fn new(
        home_team: TeamName,
        away_team: TeamName,
        started_at: DateTime<Utc>,
        sequence: u64,
    ) -> Self {
        Self {
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            started_at,
            sequence,
        }
    }

    #[must_use]
    pub fn with_scores(&self, home_score: u32, away_score: u32) -> Self {
        Self {
            home_score,
            away_score,
            ..self.clone()
        }
    }

    /// Sum of both sides' goals
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Does this team play in this match, home or away?
    #[must_use]
    pub fn involves(&self, team: &TeamName) -> bool {
        &self.home_team == team || &self.away_team == team
    }

    #[must_use]
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.home_team, &self.away_team)
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
