//! Configuration system for boxmatch.
//! TOML-based, layered: env > file > defaults.

pub mod match_config;

pub use match_config::MatchConfig;
