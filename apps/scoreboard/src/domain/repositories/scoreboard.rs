use crate::domain::errors::ScoreBoardResult;
use crate::domain::game::{Game, GameEvent};

/// Contract for a live scoreboard
///
/// Defines the four operations front ends call. Implementations must make
/// each call all-or-nothing: on error nothing changes.
pub trait ScoreBoard {
    /// Register a new 0-0 match between the two teams
    fn start_game(&mut self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent>;

    /// Overwrite the score of an active match
    fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i64,
        away_score: i64,
    ) -> ScoreBoardResult<GameEvent>;

    /// Remove an active match for good
    fn finish_game(&mut self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent>;

    /// Copies of all active matches in ranking order
    fn summary(&self) -> Vec<Game>;

    /// Number of active matches
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
