use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::game::Game;

/// Ranking used by the live summary
///
/// Higher total score first; among equal totals the most recently started
/// game comes first.
pub fn by_rank(a: &Game, b: &Game) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at().cmp(&a.started_at()))
}

/// Sorts games into summary order
///
/// The sort is stable, so games that tie on both keys keep their input order.
pub fn rank(games: impl IntoIterator<Item = Game>) -> Vec<Game> {
    let mut games: Vec<Game> = games.into_iter().collect();
    games.sort_by(by_rank);
    games
}

/// One row of the summary as shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl From<&Game> for SummaryLine {
    fn from(game: &Game) -> Self {
        Self {
            home_team: game.home_team().to_string(),
            away_team: game.away_team().to_string(),
            home_score: game.home_score(),
            away_score: game.away_score(),
        }
    }
}
