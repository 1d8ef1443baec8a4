//! GameStore - canonical game records keyed by game id.

use std::collections::HashMap;

use crate::game::Game;

#[derive(Debug, Default)]
pub struct GameStore {
    games: HashMap<String, Game>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a game, returning the record it replaced.
    pub fn put(&mut self, game: Game) -> Option<Game> {
        self.games.insert(game.game_id.clone(), game)
    }

    pub fn get(&self, game_id: &str) -> Option<&Game> {
        self.games.get(game_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
