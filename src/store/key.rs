use crate::core::team::TeamName;

/// Order-independent identity of a pairing.
///
/// Built from the two normalized team names sorted lexicographically, so
/// `(A, B)` and `(B, A)` produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: TeamName,
    second: TeamName,
}

impl PairKey {
    pub fn new(a: &TeamName, b: &TeamName) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.clone(),
            second: second.clone(),
        }
    }

    /// The two teams, in key order (not home/away order)
    pub fn teams(&self) -> (&TeamName, &TeamName) {
        (&self.first, &self.second)
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.first, self.second)
    }
}
