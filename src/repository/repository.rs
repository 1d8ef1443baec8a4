use crate::filter::{ExportFilter, PlayerHistoryFilter};
use crate::game::{Game, PlayerGameSummary};

use super::error::RepositoryError;

/// One page of a player's history feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerGamesPage {
    pub games: Vec<PlayerGameSummary>,
    /// Continuation token. Always empty: pagination is limit-only for now.
    pub next_cursor: String,
}

/// Readiness of the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Ok,
    Degraded(String),
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, HealthStatus::Ok)
    }
}

/// Look up a single game by id. A missing game is `Ok(None)`, not an error.
pub trait GetGame {
    fn get_game(&self, game_id: &str) -> Result<Option<Game>, RepositoryError>;
}

/// A player's history, newest first, filtered and limited.
pub trait ListPlayerGames {
    fn list_player_games(
        &self,
        player_id: &str,
        filter: &PlayerHistoryFilter,
    ) -> Result<PlayerGamesPage, RepositoryError>;
}

/// Games that ended inside a time window, newest first.
///
/// Fails with [`RepositoryError::Validation`] when the window is missing.
pub trait ExportGames {
    fn export_games(&self, filter: &ExportFilter) -> Result<Vec<Game>, RepositoryError>;
}

pub trait HealthCheck {
    fn health(&self) -> HealthStatus;
}

/// Full read contract combining all capabilities.
pub trait GameHistoryRepository: GetGame + ListPlayerGames + ExportGames + HealthCheck {}

// Blanket implementation: anything implementing all traits is a GameHistoryRepository
impl<T> GameHistoryRepository for T where
    T: GetGame + ListPlayerGames + ExportGames + HealthCheck
{
}
