use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::summary;
use crate::domain::errors::{ScoreBoardError, ScoreBoardResult};
use crate::domain::game::{Game, GameEvent, MatchKey, Score, TeamName};
use crate::domain::repositories::ScoreBoard;

/// Match registry aggregate root
///
/// Owns every active game, keyed by its case-insensitive home/away pair.
/// All checks run before any mutation, so a failed call leaves the registry
/// exactly as it was.
///
/// # Invariants
/// - At most one active game per match key
/// - Start timestamps are strictly increasing in `start_game` order
/// - Games never leave the registry except through `finish_game`
///
/// # Example
/// ```
/// use scoreboard::domain::scoreboard::MatchRegistry;
/// use scoreboard::domain::repositories::ScoreBoard;
///
/// let mut registry = MatchRegistry::new();
/// registry.start_game("Mexico", "Canada").expect("new match");
/// registry.update_score("Mexico", "Canada", 0, 5).expect("active match");
///
/// let summary = registry.summary();
/// assert_eq!(summary.len(), 1);
/// assert_eq!(summary[0].away_score(), 5);
/// ```
#[derive(Debug, Default)]
pub struct MatchRegistry {
    games: HashMap<MatchKey, Game>,
    last_started_at: Option<DateTime<Utc>>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the active game for the pair, if any
    pub fn get(&self, home_team: &str, away_team: &str) -> Option<Game> {
        let (home, away) = parse_pair(home_team, away_team).ok()?;
        self.games.get(&MatchKey::new(&home, &away)).cloned()
    }

    /// Wall-clock time, nudged forward so no two games share a start time
    fn next_start_time(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let started_at = match self.last_started_at {
            Some(last) if now <= last => last + Duration::nanoseconds(1),
            _ => now,
        };
        self.last_started_at = Some(started_at);
        started_at
    }
}

impl ScoreBoard for MatchRegistry {
    fn start_game(&mut self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent> {
        let (home, away) = parse_pair(home_team, away_team)?;
        let key = MatchKey::new(&home, &away);
        if self.games.contains_key(&key) {
            return Err(ScoreBoardError::MatchAlreadyExists {
                home: home.to_string(),
                away: away.to_string(),
            });
        }

        let started_at = self.next_start_time();
        let game = Game::new(home, away, started_at);
        let event = GameEvent::Started {
            game_id: game.id(),
            home_team: game.home_team().to_string(),
            away_team: game.away_team().to_string(),
        };
        self.games.insert(key, game);

        Ok(event)
    }

    fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i64,
        away_score: i64,
    ) -> ScoreBoardResult<GameEvent> {
        let home_score = Score::new(home_score)?;
        let away_score = Score::new(away_score)?;
        let (home, away) = parse_pair(home_team, away_team)?;

        let game = self
            .games
            .get_mut(&MatchKey::new(&home, &away))
            .ok_or_else(|| not_found(&home, &away))?;
        game.set_score(home_score, away_score);

        Ok(GameEvent::ScoreUpdated {
            game_id: game.id(),
            home_team: game.home_team().to_string(),
            away_team: game.away_team().to_string(),
            home_score: game.home_score(),
            away_score: game.away_score(),
        })
    }

    fn finish_game(&mut self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent> {
        let (home, away) = parse_pair(home_team, away_team)?;

        let game = self
            .games
            .remove(&MatchKey::new(&home, &away))
            .ok_or_else(|| not_found(&home, &away))?;

        Ok(GameEvent::Finished {
            game_id: game.id(),
            home_team: game.home_team().to_string(),
            away_team: game.away_team().to_string(),
            home_score: game.home_score(),
            away_score: game.away_score(),
        })
    }

    fn summary(&self) -> Vec<Game> {
        summary::rank(self.games.values().cloned())
    }

    fn len(&self) -> usize {
        self.games.len()
    }
}

fn parse_pair(home_team: &str, away_team: &str) -> ScoreBoardResult<(TeamName, TeamName)> {
    Ok((TeamName::new(home_team)?, TeamName::new(away_team)?))
}

fn not_found(home: &TeamName, away: &TeamName) -> ScoreBoardError {
    ScoreBoardError::MatchNotFound {
        home: home.to_string(),
        away: away.to_string(),
    }
}
