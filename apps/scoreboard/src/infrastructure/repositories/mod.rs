// Scoreboard implementations shared across threads
// Adapters that implement the domain ScoreBoard contract

pub mod shared_scoreboard;

pub use shared_scoreboard::SharedScoreBoard;
