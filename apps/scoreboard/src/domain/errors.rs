use thiserror::Error;

/// Errors raised by the scoreboard core
///
/// Every variant is returned at the point of the offending call and the
/// registry is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreBoardError {
    #[error("Match between {home} and {away} already exists.")]
    MatchAlreadyExists { home: String, away: String },

    #[error("Match between {home} and {away} not found.")]
    MatchNotFound { home: String, away: String },

    #[error("Scores cannot be negative (got {value}).")]
    InvalidScore { value: i64 },

    #[error("Score {value} is out of range.")]
    ScoreOutOfRange { value: i64 },

    #[error("Team name cannot be blank.")]
    InvalidTeamName,
}

pub type ScoreBoardResult<T> = Result<T, ScoreBoardError>;
