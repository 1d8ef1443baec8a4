//! InMemoryRepository - RwLock-guarded game store and player index.

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use crate::filter::{ExportFilter, PlayerHistoryFilter};
use crate::game::Game;
use crate::query;
use crate::store::{GameStore, PlayerIndex};

use super::error::RepositoryError;
use super::repository::{
    ExportGames, GetGame, HealthCheck, HealthStatus, ListPlayerGames, PlayerGamesPage,
};

#[derive(Debug, Default)]
struct State {
    games: GameStore,
    players: PlayerIndex,
}

/// In-memory repository for local runs and tests.
///
/// Reads share the lock and may run in parallel. [`seed`](Self::seed) holds
/// the write lock for the whole batch, so readers see either none or all of
/// a game's effects. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-loaded with `games`.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Result<Self, RepositoryError> {
        let repo = Self::new();
        repo.seed(games)?;
        Ok(repo)
    }

    /// Load games into the store and index them. Returns how many were
    /// ingested.
    ///
    /// Games failing [`Game::validate`] are skipped. Seeding an id that is
    /// already stored replaces the earlier record and its summaries.
    pub fn seed(&self, games: impl IntoIterator<Item = Game>) -> Result<usize, RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("seed"))?;

        let mut ingested = 0;
        for game in games {
            if let Err(err) = game.validate() {
                warn!(error = %err, "skipping invalid game");
                continue;
            }

            let State { games, players } = &mut *state;
            if let Some(previous) = games.get(&game.game_id) {
                players.on_game_replaced(previous);
            }
            players.on_game_ingested(&game);
            games.put(game);
            ingested += 1;
        }

        info!(
            ingested,
            total_games = state.games.len(),
            players = state.players.player_count(),
            "seeded repository"
        );
        Ok(ingested)
    }

    /// Number of stored games.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("len"))?;
        Ok(state.games.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl GetGame for InMemoryRepository {
    fn get_game(&self, game_id: &str) -> Result<Option<Game>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("get game"))?;
        Ok(state.games.get(game_id).cloned())
    }
}

impl ListPlayerGames for InMemoryRepository {
    fn list_player_games(
        &self,
        player_id: &str,
        filter: &PlayerHistoryFilter,
    ) -> Result<PlayerGamesPage, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("list player games"))?;

        let games = query::filter_player_history(state.players.query(player_id), filter);
        debug!(player_id, count = games.len(), "listed player games");

        Ok(PlayerGamesPage {
            games,
            next_cursor: String::new(),
        })
    }
}

impl ExportGames for InMemoryRepository {
    fn export_games(&self, filter: &ExportFilter) -> Result<Vec<Game>, RepositoryError> {
        let (from, to) = match (filter.from, filter.to) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(RepositoryError::validation("from and to are required")),
        };

        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("export games"))?;

        let games = query::export_games(state.games.iter(), filter, from, to);
        debug!(%from, %to, count = games.len(), "exported games");
        Ok(games)
    }
}

impl HealthCheck for InMemoryRepository {
    fn health(&self) -> HealthStatus {
        // Nothing external to lose contact with; a poisoned lock is the only
        // way this store can stop serving.
        match self.state.read() {
            Ok(_) => HealthStatus::Ok,
            Err(_) => HealthStatus::Degraded("repository lock poisoned".into()),
        }
    }
}
