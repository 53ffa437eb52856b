use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{ScoreBoardError, ScoreBoardResult};

/// Team name value object
///
/// # Invariants
/// - Never blank
/// - Surrounding whitespace is trimmed
/// - Casing is preserved for display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the trimmed name is not empty
    /// * `Err(ScoreBoardError::InvalidTeamName)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use scoreboard::domain::game::value_objects::TeamName;
    ///
    /// let name = TeamName::new("  Spain ").expect("valid name");
    /// assert_eq!(name.as_str(), "Spain");
    /// assert!(TeamName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> ScoreBoardResult<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ScoreBoardError::InvalidTeamName);
        }
        Ok(TeamName(trimmed.to_string()))
    }

    /// Returns the name as given by the caller
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the case-folded form used for identity
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a match inside the registry
///
/// Case-insensitive and order-sensitive: `Spain`/`Brazil` and
/// `spain`/`BRAZIL` share a key, `Brazil`/`Spain` does not. The two halves
/// are kept apart so names containing the separator cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    home: String,
    away: String,
}

impl MatchKey {
    pub fn new(home: &TeamName, away: &TeamName) -> Self {
        Self {
            home: home.folded(),
            away: away.folded(),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Goal count for one side of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);

    /// Validates a caller-supplied score
    ///
    /// Negative values fail with `InvalidScore`; values that do not fit a
    /// `u32` fail with `ScoreOutOfRange`.
    pub fn new(value: i64) -> ScoreBoardResult<Self> {
        if value < 0 {
            return Err(ScoreBoardError::InvalidScore { value });
        }
        u32::try_from(value)
            .map(Score)
            .map_err(|_| ScoreBoardError::ScoreOutOfRange { value })
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
