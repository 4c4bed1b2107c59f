use serde::Serialize;

/// Canonical identity of a team.
///
/// Two raw spellings that refer to the same team (differing only in case,
/// hyphenation, or whitespace) normalize to the same `TeamName`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Normalize a raw, user-supplied team name.
    ///
    /// # Examples
    ///
    /// ```
    /// use live_scoreboard::core::team::TeamName;
    ///
    /// let a = TeamName::normalize("United-States of America");
    /// let b = TeamName::normalize(" united States-of-america");
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str(), "United States Of America");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_team_name(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TeamName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Canonicalize a team name.
///
/// Hyphens are word separators, whitespace runs collapse to a single space,
/// and every word is capitalized with the remainder lower-cased. Empty or
/// whitespace-only input yields an empty string.
#[must_use]
pub fn normalize_team_name(raw: &str) -> String {
    raw.replace('-', " ")
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
