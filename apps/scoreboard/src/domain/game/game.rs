use super::value_objects::{MatchKey, Score, TeamName};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A match in progress
///
/// Teams, id and start time are fixed at creation. Scores change only
/// through the registry that owns the game, so every `Game` handed out by
/// the public API is a copy.
///
/// # Invariants
/// - Scores are never negative
/// - `home_team`, `away_team`, `started_at` never change
///
/// # Example
/// ```
/// use scoreboard::domain::game::value_objects::TeamName;
/// use scoreboard::domain::game::Game;
///
/// let game = Game::new(
///     TeamName::new("Mexico").unwrap(),
///     TeamName::new("Canada").unwrap(),
///     chrono::Utc::now(),
/// );
///
/// assert_eq!(game.home_team(), "Mexico");
/// assert_eq!(game.total_score(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: Uuid,
    home_team: TeamName,
    away_team: TeamName,
    home_score: Score,
    away_score: Score,
    started_at: DateTime<Utc>,
}

impl Game {
    /// Creates a game at 0-0 that started at `started_at`
    pub fn new(home_team: TeamName, away_team: TeamName, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team,
            away_team,
            home_score: Score::ZERO,
            away_score: Score::ZERO,
            started_at,
        }
    }

    pub(crate) fn set_score(&mut self, home_score: Score, away_score: Score) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn key(&self) -> MatchKey {
        MatchKey::new(&self.home_team, &self.away_team)
    }

    pub fn home_team(&self) -> &str {
        self.home_team.as_str()
    }

    pub fn away_team(&self) -> &str {
        self.away_team.as_str()
    }

    pub fn home_score(&self) -> u32 {
        self.home_score.value()
    }

    pub fn away_score(&self) -> u32 {
        self.away_score.value()
    }

    /// Sum of both scores, widened so it cannot overflow
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score.value()) + u64::from(self.away_score.value())
    }

    /// Start timestamp, used only for ranking
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
