// Contracts the domain exposes to its callers

pub mod scoreboard;

pub use scoreboard::ScoreBoard;
