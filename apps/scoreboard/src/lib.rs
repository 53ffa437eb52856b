//! Live Scoreboard Library
//!
//! This library provides the core functionality for the live football
//! scoreboard, including the match registry, its ranking rules, a
//! thread-safe handle, and the interactive command-line front end.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
