use std::cmp::Ordering;
use std::iter::Enumerate;
use std::vec::IntoIter;

use serde::Serialize;

use crate::core::fixture::Match;

/// Summary order: total score descending, then most recently started first.
///
/// Start sequence is the last resort for matches started within the same
/// clock instant.
#[must_use]
pub fn compare_for_summary(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at.cmp(&a.started_at))
        .then_with(|| b.sequence.cmp(&a.sequence))
}

/// Sort matches into summary order
#[must_use]
pub fn rank_matches(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by(compare_for_summary);
    matches
}

/// One entry of the summary, with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    pub rank: usize,

    #[serde(flatten)]
    pub fixture: Match,
}

impl std::fmt::Display for RankedMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.rank, self.fixture)
    }
}

/// Ranked view over a snapshot of active matches.
///
/// Ordering happens once when the snapshot is taken; entries are numbered
/// as they are pulled.
#[derive(Debug)]
pub struct Summary {
    entries: Enumerate<IntoIter<Match>>,
}

impl Summary {
    pub fn new(matches: Vec<Match>) -> Self {
        Self {
            entries: rank_matches(matches).into_iter().enumerate(),
        }
    }

    /// Render the remaining entries as `"<rank>.<home> <n> - <away> <n>"` lines
    pub fn lines(self) -> impl Iterator<Item = String> {
        self.map(|entry| entry.to_string())
    }
}

impl Iterator for Summary {
    type Item = RankedMatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(index, fixture)| RankedMatch {
            rank: index + 1,
            fixture,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Summary {}
