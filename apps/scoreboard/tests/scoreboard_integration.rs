//! Integration tests for the scoreboard core
//!
//! These tests drive the registry through the public `ScoreBoard` contract,
//! covering the match lifecycle, identity rules, ranking, and the shared
//! handle used by concurrent callers.

use proptest::prelude::*;
use scoreboard::domain::errors::ScoreBoardError;
use scoreboard::domain::game::{Game, GameEvent};
use scoreboard::domain::repositories::ScoreBoard;
use scoreboard::domain::scoreboard::MatchRegistry;
use scoreboard::infrastructure::repositories::SharedScoreBoard;
use std::thread;

/// Home team names of the summary, in order
fn summary_homes(board: &impl ScoreBoard) -> Vec<String> {
    board
        .summary()
        .iter()
        .map(|game| game.home_team().to_string())
        .collect()
}

/// Registers the five matches of the reference example with their scores
fn play_reference_round(board: &mut impl ScoreBoard) {
    let fixtures = [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ];

    for (home, away, _, _) in fixtures {
        board.start_game(home, away).expect("fresh fixture");
    }
    for (home, away, home_score, away_score) in fixtures {
        board
            .update_score(home, away, home_score, away_score)
            .expect("active fixture");
    }
}

#[test]
fn test_reference_round_ordering() {
    let mut registry = MatchRegistry::new();
    play_reference_round(&mut registry);

    assert_eq!(
        summary_homes(&registry),
        ["Uruguay", "Spain", "Mexico", "Argentina", "Germany"],
        "Ties on total should put the most recent start first"
    );

    let totals: Vec<u64> = registry.summary().iter().map(Game::total_score).collect();
    assert_eq!(totals, [12, 12, 5, 4, 4]);
}

#[test]
fn test_reference_round_through_shared_handle() {
    let mut board = SharedScoreBoard::new();
    play_reference_round(&mut board);

    assert_eq!(
        summary_homes(&board),
        ["Uruguay", "Spain", "Mexico", "Argentina", "Germany"]
    );
}

#[test]
fn test_full_lifecycle() {
    let mut registry = MatchRegistry::new();

    let started = registry.start_game("Mexico", "Canada").expect("start");
    let updated = registry.update_score("Mexico", "Canada", 2, 1).expect("update");
    let finished = registry.finish_game("Mexico", "Canada").expect("finish");

    assert!(matches!(started, GameEvent::Started { .. }));
    assert!(matches!(
        updated,
        GameEvent::ScoreUpdated { home_score: 2, away_score: 1, .. }
    ));
    assert!(matches!(
        finished,
        GameEvent::Finished { home_score: 2, away_score: 1, .. }
    ));
    assert_eq!(started.game_id(), finished.game_id(), "Events should share the game id");
    assert!(registry.is_empty());
    assert!(registry.summary().is_empty());
}

#[test]
fn test_failed_calls_leave_registry_unchanged() {
    let mut registry = MatchRegistry::new();
    registry.start_game("Spain", "Brazil").unwrap();
    registry.update_score("Spain", "Brazil", 1, 0).unwrap();
    let before = registry.summary();

    assert!(matches!(
        registry.start_game("SPAIN", "brazil"),
        Err(ScoreBoardError::MatchAlreadyExists { .. })
    ));
    assert!(matches!(
        registry.update_score("Spain", "Brazil", 3, -2),
        Err(ScoreBoardError::InvalidScore { value: -2 })
    ));
    assert!(matches!(
        registry.update_score("Brazil", "Spain", 3, 2),
        Err(ScoreBoardError::MatchNotFound { .. })
    ));
    assert!(matches!(
        registry.finish_game("Spain", " "),
        Err(ScoreBoardError::InvalidTeamName)
    ));

    assert_eq!(registry.summary(), before, "No failed call may mutate the registry");
}

#[test]
fn test_summary_copies_do_not_alias_registry() {
    let mut registry = MatchRegistry::new();
    registry.start_game("Germany", "France").unwrap();

    let first = registry.summary();
    registry.update_score("Germany", "France", 2, 2).unwrap();
    let second = registry.summary();

    assert_eq!(first[0].total_score(), 0);
    assert_eq!(second[0].total_score(), 4);
}

#[test]
fn test_concurrent_updates_on_distinct_matches() {
    let board = SharedScoreBoard::new();
    for i in 0..4 {
        board.start_game(&format!("Home {i}"), "Away").unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let board = board.clone();
            thread::spawn(move || {
                for goals in 1..=10 {
                    board
                        .update_score(&format!("Home {i}"), "away", goals * (i + 1), 0)
                        .expect("active match");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        summary_homes(&board),
        ["Home 3", "Home 2", "Home 1", "Home 0"]
    );
}

proptest! {
    #[test]
    fn prop_summary_is_always_ranked(scores in prop::collection::vec((0i64..20, 0i64..20), 1..12)) {
        let mut registry = MatchRegistry::new();
        for (i, (home_score, away_score)) in scores.iter().enumerate() {
            let home = format!("Team {i}");
            registry.start_game(&home, "Rival").unwrap();
            registry.update_score(&home, "Rival", *home_score, *away_score).unwrap();
        }

        let summary = registry.summary();
        prop_assert_eq!(summary.len(), scores.len());
        for pair in summary.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.total_score() >= b.total_score());
            if a.total_score() == b.total_score() {
                prop_assert!(a.started_at() > b.started_at());
            }
        }
    }

    #[test]
    fn prop_negative_scores_always_rejected(home_score in i64::MIN..0, away_score in 0i64..100) {
        let mut registry = MatchRegistry::new();
        registry.start_game("Home", "Away").unwrap();

        let result = registry.update_score("Home", "Away", home_score, away_score);

        prop_assert_eq!(result, Err(ScoreBoardError::InvalidScore { value: home_score }));
        prop_assert_eq!(registry.get("Home", "Away").unwrap().total_score(), 0);
    }
}
