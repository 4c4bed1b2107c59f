use thiserror::Error;

use crate::core::fixture::Match;
use crate::core::team::TeamName;

/// Rejections from the scoreboard.
///
/// Every variant describes a caller mistake; the scoreboard is left exactly
/// as it was before the rejected call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Team {team} cannot play against itself")]
    InvalidTeamPairing { team: TeamName },

    #[error("Team {team} can't play two matches at the same time (already playing {existing})")]
    TeamAlreadyPlaying { team: TeamName, existing: Match },

    #[error("No match in progress between {home} and {away}")]
    MatchNotFound { home: TeamName, away: TeamName },

    #[error(
        "Score can't be deducted or negative: requested {home_score}-{away_score}, current score is {current}"
    )]
    InvalidScore {
        home_score: i64,
        away_score: i64,
        current: Match,
    },
}
