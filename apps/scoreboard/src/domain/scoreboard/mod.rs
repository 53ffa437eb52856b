// Scoreboard domain module
// Contains the match registry aggregate and the summary ranking

pub mod registry;
pub mod summary;

pub use registry::MatchRegistry;
pub use summary::SummaryLine;
