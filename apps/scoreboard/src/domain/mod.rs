// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of the CLI and of any locking strategy

pub mod errors;
pub mod game;
pub mod repositories;
pub mod scoreboard;
