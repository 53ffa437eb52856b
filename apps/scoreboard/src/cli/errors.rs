use thiserror::Error;

use crate::domain::errors::ScoreBoardError;

/// Errors that can occur while handling one command line
///
/// None of these end the session; they are printed and the prompt returns.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: '{0}'. Type 'help' for commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Score must be a whole number, got '{0}'.")]
    InvalidNumber(String),

    #[error("Input line is not valid UTF-8.")]
    InvalidEncoding,

    #[error("Unterminated quote in command line.")]
    UnterminatedQuote,

    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    ScoreBoard(#[from] ScoreBoardError),
}

pub type CommandResult<T> = Result<T, CommandError>;
