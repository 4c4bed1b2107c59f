use std::collections::HashMap;

use crate::core::fixture::Match;
use crate::core::team::TeamName;

use super::key::PairKey;
use super::MatchStore;

/// Hash-map backed [`MatchStore`]
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    /// All active matches, by pairing
    matches: HashMap<PairKey, Match>,

    /// Index: team -> pairing it currently plays in
    team_to_key: HashMap<TeamName, PairKey>,
}

impl InMemoryMatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            matches: HashMap::new(),
            team_to_key: HashMap::new(),
        }
    }

    /// Drop the team index entry only if it still points at `key`.
    ///
    /// A team re-upserted into another pairing keeps its newer entry.
    fn unindex_team(&mut self, team: &TeamName, key: &PairKey) {
        if self.team_to_key.get(team) == Some(key) {
            self.team_to_key.remove(team);
        }
    }
}

impl MatchStore for InMemoryMatchStore {
    fn upsert(&mut self, fixture: Match) {
        let key = fixture.key();

        self.team_to_key
            .insert(fixture.home_team.clone(), key.clone());
        self.team_to_key
            .insert(fixture.away_team.clone(), key.clone());

        self.matches.insert(key, fixture);
    }

    fn get_by_pair(&self, a: &TeamName, b: &TeamName) -> Option<Match> {
        self.matches.get(&PairKey::new(a, b)).cloned()
    }

    fn get_by_team(&self, team: &TeamName) -> Option<Match> {
        self.team_to_key
            .get(team)
            .and_then(|key| self.matches.get(key))
            .filter(|fixture| fixture.involves(team))
            .cloned()
    }

    fn get_all(&self) -> Vec<Match> {
        self.matches.values().cloned().collect()
    }

    fn remove(&mut self, key: &PairKey) -> Option<Match> {
        let removed = self.matches.remove(key)?;
        let (first, second) = key.teams();
        self.unindex_team(first, key);
        self.unindex_team(second, key);
        Some(removed)
    }

    fn len(&self) -> usize {
        self.matches.len()
    }
}
