//! PlayerIndex - per-player game summaries, newest first.

use std::collections::HashMap;

use crate::game::{Game, PlayerGameSummary, Side};

/// Derived view over the game store. Every stored game contributes exactly
/// one summary to each participant's list, and every list is sorted by
/// `ended_at` descending. Equal timestamps keep insertion order.
#[derive(Debug, Default)]
pub struct PlayerIndex {
    entries: HashMap<String, Vec<PlayerGameSummary>>,
}

impl PlayerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add both participants' summaries for `game` and re-sort their lists.
    pub fn on_game_ingested(&mut self, game: &Game) {
        for side in [Side::White, Side::Black] {
            self.entries
                .entry(game.player_id(side).to_string())
                .or_default()
                .push(game.summary_for(side));
        }

        self.resort(game.player_id(Side::White));
        if game.black_player_id != game.white_player_id {
            self.resort(game.player_id(Side::Black));
        }
    }

    /// Drop the summaries `game` contributed, e.g. before it is overwritten.
    pub fn on_game_replaced(&mut self, game: &Game) {
        for side in [Side::White, Side::Black] {
            let player_id = game.player_id(side);
            if let Some(list) = self.entries.get_mut(player_id) {
                list.retain(|summary| summary.game_id != game.game_id);
                if list.is_empty() {
                    self.entries.remove(player_id);
                }
            }
        }
    }

    /// The player's full history, newest first. Empty for unknown players.
    pub fn query(&self, player_id: &str) -> &[PlayerGameSummary] {
        self.entries
            .get(player_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    // TODO: switch to a binary-search insert if ingestion stops being
    // seed-only; a full stable sort per game is O(n log n) in the list size.
    fn resort(&mut self, player_id: &str) {
        if let Some(list) = self.entries.get_mut(player_id) {
            list.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));
        }
    }
}
