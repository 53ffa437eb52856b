use uuid::Uuid;

/// Domain events emitted by successful registry mutations
///
/// The registry returns one event per call; callers log or forward them.
/// Nothing is stored, so a finished game leaves no trace in the registry.
///
/// # Example
/// ```
/// use scoreboard::domain::game::events::GameEvent;
/// use uuid::Uuid;
///
/// let event = GameEvent::Started {
///     game_id: Uuid::new_v4(),
///     home_team: "Mexico".to_string(),
///     away_team: "Canada".to_string(),
/// };
/// assert_eq!(event.home_team(), "Mexico");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Fired when a game is registered
    Started {
        game_id: Uuid,
        home_team: String,
        away_team: String,
    },
    /// Fired when a game's score is overwritten
    ScoreUpdated {
        game_id: Uuid,
        home_team: String,
        away_team: String,
        home_score: u32,
        away_score: u32,
    },
    /// Fired when a game is removed; carries the final score
    Finished {
        game_id: Uuid,
        home_team: String,
        away_team: String,
        home_score: u32,
        away_score: u32,
    },
}

impl GameEvent {
    pub fn game_id(&self) -> Uuid {
        match self {
            GameEvent::Started { game_id, .. } => *game_id,
            GameEvent::ScoreUpdated { game_id, .. } => *game_id,
            GameEvent::Finished { game_id, .. } => *game_id,
        }
    }

    pub fn home_team(&self) -> &str {
        match self {
            GameEvent::Started { home_team, .. }
            | GameEvent::ScoreUpdated { home_team, .. }
            | GameEvent::Finished { home_team, .. } => home_team,
        }
    }

    pub fn away_team(&self) -> &str {
        match self {
            GameEvent::Started { away_team, .. }
            | GameEvent::ScoreUpdated { away_team, .. }
            | GameEvent::Finished { away_team, .. } => away_team,
        }
    }

    /// Short lowercase name for log output
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::Started { .. } => "started",
            GameEvent::ScoreUpdated { .. } => "score_updated",
            GameEvent::Finished { .. } => "finished",
        }
    }
}
