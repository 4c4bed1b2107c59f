use tracing::debug;

use crate::core::clock::{Clock, SystemClock};
use crate::core::fixture::Match;
use crate::core::team::TeamName;
use crate::scoreboard::error::ScoreboardError;
use crate::scoreboard::ranking::{rank_matches, Summary};
use crate::store::{InMemoryMatchStore, MatchStore};

/// Live scoreboard for matches in progress.
///
/// Every operation takes raw team names and normalizes them before touching
/// the store. Rejected calls leave the scoreboard unchanged.
#[derive(Debug)]
pub struct Scoreboard<S: MatchStore = InMemoryMatchStore> {
    store: S,
    clock: Box<dyn Clock>,
    /// Sequence number handed to the next started match
    next_sequence: u64,
}

impl Scoreboard<InMemoryMatchStore> {
    /// Create an empty scoreboard timed by the system clock
    pub fn new() -> Self {
        Self::with_store_and_clock(InMemoryMatchStore::new(), Box::new(SystemClock))
    }

    /// Create an empty scoreboard with a custom clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::with_store_and_clock(InMemoryMatchStore::new(), clock)
    }
}

impl Default for Scoreboard<InMemoryMatchStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MatchStore> Scoreboard<S> {
    pub fn with_store_and_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            next_sequence: 0,
        }
    }

    /// Start a new match at 0-0.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::InvalidTeamPairing` if both names refer to
    /// the same team (two blank names included), or
    /// `ScoreboardError::TeamAlreadyPlaying` if either team is in a match
    /// already.
    pub fn start_match(&mut self, home: &str, away: &str) -> Result<Match, ScoreboardError> {
        let (home_team, away_team) = normalize_pair(home, away);

        if home_team == away_team {
            debug!("Rejected start: {} paired with itself", home_team);
            return Err(ScoreboardError::InvalidTeamPairing { team: home_team });
        }

        for team in [&home_team, &away_team] {
            if let Some(existing) = self.store.get_by_team(team) {
                debug!("Rejected start: {} is already playing {}", team, existing);
                return Err(ScoreboardError::TeamAlreadyPlaying {
                    team: team.clone(),
                    existing,
                });
            }
        }

        let fixture = Match::new(home_team, away_team, self.clock.now(), self.next_sequence);
        self.next_sequence += 1;

        debug!("Started {}", fixture);
        self.store.upsert(fixture.clone());
        Ok(fixture)
    }

    /// Record a new score for a match in progress.
    ///
    /// The pair may be named in either order; scores follow the order the
    /// teams are given in and are stored against each team's own side.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::MatchNotFound` if the teams are not playing
    /// each other, or `ScoreboardError::InvalidScore` if either score is
    /// negative or lower than the one already recorded for that team.
    pub fn update_score(
        &mut self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<Match, ScoreboardError> {
        let (home_team, away_team) = normalize_pair(home, away);
        let current = self.find_match(&home_team, &away_team)?;

        let (stored_home, stored_away) = if current.home_team == home_team {
            (home_score, away_score)
        } else {
            (away_score, home_score)
        };

        let accepted = (
            checked_score(stored_home, current.home_score),
            checked_score(stored_away, current.away_score),
        );
        let (Some(new_home), Some(new_away)) = accepted else {
            debug!(
                "Rejected score {}-{} for {}",
                stored_home, stored_away, current
            );
            return Err(ScoreboardError::InvalidScore {
                home_score: stored_home,
                away_score: stored_away,
                current,
            });
        };

        let updated = current.with_scores(new_home, new_away);
        debug!("Updated {}", updated);
        self.store.upsert(updated.clone());
        Ok(updated)
    }

    /// Finish a match and take it off the board.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::MatchNotFound` if the teams are not playing
    /// each other.
    pub fn finish_match(&mut self, home: &str, away: &str) -> Result<Match, ScoreboardError> {
        let (home_team, away_team) = normalize_pair(home, away);
        let current = self.find_match(&home_team, &away_team)?;

        self.store.remove(&current.key());
        debug!("Finished {}", current);
        Ok(current)
    }

    /// Ranked summary of the matches in progress.
    ///
    /// Each call takes a fresh snapshot; nothing is cached.
    pub fn summary(&self) -> Summary {
        Summary::new(self.store.get_all())
    }

    /// The summary rendered as one line per match, joined by `'\n'`
    pub fn summary_text(&self) -> String {
        self.summary().lines().collect::<Vec<_>>().join("\n")
    }

    /// Matches in progress, in summary order
    pub fn active_matches(&self) -> Vec<Match> {
        rank_matches(self.store.get_all())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn find_match(&self, home: &TeamName, away: &TeamName) -> Result<Match, ScoreboardError> {
        self.store.get_by_pair(home, away).ok_or_else(|| {
            debug!("No match in progress between {} and {}", home, away);
            ScoreboardError::MatchNotFound {
                home: home.clone(),
                away: away.clone(),
            }
        })
    }
}

fn normalize_pair(home: &str, away: &str) -> (TeamName, TeamName) {
    (TeamName::normalize(home), TeamName::normalize(away))
}

/// The new score if it is representable and not below the current one
fn checked_score(requested: i64, current: u32) -> Option<u32> {
    u32::try_from(requested).ok().filter(|&score| score >= current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use chrono::Duration;

    fn make_scoreboard() -> (Scoreboard, ManualClock) {
        let clock = ManualClock::default();
        (Scoreboard::with_clock(Box::new(clock.clone())), clock)
    }

    #[test]
    fn test_start_match_goalless() {
        let (mut board, clock) = make_scoreboard();
        let fixture = board.start_match("uruguay", "PANAMA").unwrap();

        assert_eq!(fixture.home_team, "Uruguay");
        assert_eq!(fixture.away_team, "Panama");
        assert_eq!((fixture.home_score, fixture.away_score), (0, 0));
        assert_eq!(fixture.started_at, clock.now());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_start_match_against_itself() {
        let (mut board, _) = make_scoreboard();
        let err = board
            .start_match("United-States of America", " united States-of-america")
            .unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::InvalidTeamPairing {
                team: TeamName::normalize("United States Of America")
            }
        );
        assert!(board.is_empty());
    }

    #[test]
    fn test_start_match_blank_names_pair_with_each_other() {
        let (mut board, _) = make_scoreboard();
        let err = board.start_match("  ", "-").unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::InvalidTeamPairing {
                team: TeamName::normalize("")
            }
        );
        assert!(board.is_empty());
    }

    #[test]
    fn test_blank_name_has_no_match_in_progress() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Brazil", "Germany").unwrap();

        let err = board.finish_match(" ", "Brazil").unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::MatchNotFound {
                home: TeamName::normalize(""),
                away: TeamName::normalize("Brazil"),
            }
        );

        let err = board.update_score("Germany", "\t", 1, 0).unwrap_err();
        assert!(matches!(err, ScoreboardError::MatchNotFound { .. }));
        assert_eq!(board.summary_text(), "1.Brazil 0 - Germany 0");
    }

    #[test]
    fn test_start_match_team_already_playing() {
        let (mut board, _) = make_scoreboard();
        let existing = board.start_match("Uruguay", "Panama").unwrap();

        let err = board.start_match("Brazil", "panama").unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::TeamAlreadyPlaying {
                team: TeamName::normalize("Panama"),
                existing: existing.clone(),
            }
        );

        // Reversed pairing is the same match, still a conflict
        let err = board.start_match("Panama", "Uruguay").unwrap_err();
        assert!(matches!(err, ScoreboardError::TeamAlreadyPlaying { .. }));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_start_match_reports_home_conflict_first() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        board.start_match("Brazil", "Germany").unwrap();

        let err = board.start_match("Germany", "Uruguay").unwrap_err();
        match err {
            ScoreboardError::TeamAlreadyPlaying { team, existing } => {
                assert_eq!(team, "Germany");
                assert_eq!(existing.home_team, "Brazil");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_update_score() {
        let (mut board, clock) = make_scoreboard();
        let started = board.start_match("Uruguay", "Panama").unwrap();
        clock.advance(Duration::minutes(30));

        let updated = board.update_score("uruguay", "panama", 2, 0).unwrap();
        assert_eq!((updated.home_score, updated.away_score), (2, 0));
        assert_eq!(updated.started_at, started.started_at);
        assert_eq!(updated.sequence, started.sequence);
        assert_eq!(board.summary_text(), "1.Uruguay 2 - Panama 0");
    }

    #[test]
    fn test_update_score_same_value_allowed() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        board.update_score("Uruguay", "Panama", 0, 0).unwrap();
        board.update_score("Uruguay", "Panama", 1, 0).unwrap();
        board.update_score("Uruguay", "Panama", 1, 0).unwrap();
        assert_eq!(board.summary_text(), "1.Uruguay 1 - Panama 0");
    }

    #[test]
    fn test_update_score_reversed_order() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();

        let updated = board.update_score("Panama", "Uruguay", 1, 3).unwrap();
        assert_eq!(updated.home_team, "Uruguay");
        assert_eq!((updated.home_score, updated.away_score), (3, 1));
    }

    #[test]
    fn test_update_score_not_started() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();

        let err = board.update_score("Uruguay", "Brazil", 1, 0).unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::MatchNotFound {
                home: TeamName::normalize("Uruguay"),
                away: TeamName::normalize("Brazil"),
            }
        );
    }

    #[test]
    fn test_update_score_negative() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();

        for (home, away) in [(-1, 0), (0, -1), (5, -1), (-3, 7)] {
            let err = board.update_score("Uruguay", "Panama", home, away).unwrap_err();
            assert!(matches!(err, ScoreboardError::InvalidScore { .. }));
        }
        assert_eq!(board.summary_text(), "1.Uruguay 0 - Panama 0");
    }

    #[test]
    fn test_update_score_cannot_be_deducted() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        board.update_score("Uruguay", "Panama", 2, 2).unwrap();

        for (home, away) in [(1, 2), (2, 1), (1, 5), (9, 0)] {
            let err = board.update_score("Uruguay", "Panama", home, away).unwrap_err();
            assert!(matches!(err, ScoreboardError::InvalidScore { .. }));
        }
        assert_eq!(board.summary_text(), "1.Uruguay 2 - Panama 2");
    }

    #[test]
    fn test_update_score_too_large() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();

        let err = board
            .update_score("Uruguay", "Panama", i64::from(u32::MAX) + 1, 0)
            .unwrap_err();
        assert!(matches!(err, ScoreboardError::InvalidScore { .. }));
    }

    #[test]
    fn test_finish_match() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        board.start_match("Brazil", "Germany").unwrap();

        let finished = board.finish_match("panama", "uruguay").unwrap();
        assert_eq!(finished.home_team, "Uruguay");
        assert_eq!(board.summary_text(), "1.Brazil 0 - Germany 0");

        let err = board.finish_match("Uruguay", "Panama").unwrap_err();
        assert!(matches!(err, ScoreboardError::MatchNotFound { .. }));
    }

    #[test]
    fn test_finished_teams_can_play_again() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        board.update_score("Uruguay", "Panama", 4, 1).unwrap();
        board.finish_match("Uruguay", "Panama").unwrap();

        board.start_match("Panama", "Brazil").unwrap();
        let replay = board.start_match("Uruguay", "Germany").unwrap();
        assert_eq!((replay.home_score, replay.away_score), (0, 0));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_summary_is_repeatable() {
        let (mut board, clock) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        clock.advance(Duration::minutes(1));
        board.start_match("Brazil", "Germany").unwrap();

        let first: Vec<String> = board.summary().lines().collect();
        let second: Vec<String> = board.summary().lines().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "1.Brazil 0 - Germany 0");
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_starts_within_same_instant_rank_by_start_order() {
        let (mut board, _) = make_scoreboard();
        board.start_match("Uruguay", "Panama").unwrap();
        board.start_match("Brazil", "Germany").unwrap();

        let active = board.active_matches();
        assert_eq!(active[0].home_team, "Brazil");
        assert_eq!(active[1].home_team, "Uruguay");
    }

    #[test]
    fn test_empty_summary() {
        let board = Scoreboard::new();
        assert_eq!(board.summary().count(), 0);
        assert_eq!(board.summary_text(), "");
        assert!(board.active_matches().is_empty());
    }
}
