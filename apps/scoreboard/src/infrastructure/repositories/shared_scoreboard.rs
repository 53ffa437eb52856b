use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::errors::ScoreBoardResult;
use crate::domain::game::{Game, GameEvent};
use crate::domain::repositories::ScoreBoard;
use crate::domain::scoreboard::MatchRegistry;

/// Thread-safe handle to a single `MatchRegistry`
///
/// Clones share the same registry. Every operation holds the lock for its
/// whole check-then-act, so two concurrent identical `start_game` calls
/// produce one match and one `MatchAlreadyExists`.
#[derive(Debug, Clone, Default)]
pub struct SharedScoreBoard {
    inner: Arc<Mutex<MatchRegistry>>,
}

impl SharedScoreBoard {
    /// Creates a handle around an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing registry
    pub fn from_registry(registry: MatchRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MatchRegistry> {
        // Registry methods validate before mutating, so state behind a
        // poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("scoreboard lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn start_game(&self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent> {
        self.lock().start_game(home_team, away_team)
    }

    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i64,
        away_score: i64,
    ) -> ScoreBoardResult<GameEvent> {
        self.lock()
            .update_score(home_team, away_team, home_score, away_score)
    }

    pub fn finish_game(&self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent> {
        self.lock().finish_game(home_team, away_team)
    }

    pub fn summary(&self) -> Vec<Game> {
        self.lock().summary()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreBoard for SharedScoreBoard {
    fn start_game(&mut self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent> {
        SharedScoreBoard::start_game(self, home_team, away_team)
    }

    fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i64,
        away_score: i64,
    ) -> ScoreBoardResult<GameEvent> {
        SharedScoreBoard::update_score(self, home_team, away_team, home_score, away_score)
    }

    fn finish_game(&mut self, home_team: &str, away_team: &str) -> ScoreBoardResult<GameEvent> {
        SharedScoreBoard::finish_game(self, home_team, away_team)
    }

    fn summary(&self) -> Vec<Game> {
        SharedScoreBoard::summary(self)
    }

    fn len(&self) -> usize {
        SharedScoreBoard::len(self)
    }
}
