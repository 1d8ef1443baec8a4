//! Read-side service for chess game history.
//!
//! Finished games are loaded into an [`InMemoryRepository`], which keeps the
//! canonical records together with a per-player index of summaries sorted
//! newest first. The repository answers three reads (a single game, a
//! player's filtered history and a time-window export) plus a health check,
//! and the optional `http` feature exposes them as a JSON API.

pub mod config;
mod filter;
mod game;
pub mod query;
mod repository;
pub mod seed;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError};
pub use filter::{ExportFilter, PlayerHistoryFilter};
pub use game::{
    Game, GameResult, GameValidationError, Move, PlayerGameSummary, PlayerResult, Side,
};
pub use repository::{
    ExportGames, GameHistoryRepository, GetGame, HealthCheck, HealthStatus, InMemoryRepository,
    ListPlayerGames, PlayerGamesPage, RepositoryError,
};
pub use seed::SeedError;
pub use store::{GameStore, PlayerIndex};
