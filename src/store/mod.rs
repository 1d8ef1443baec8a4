//! In-process containers behind the repository.
//!
//! Neither container synchronizes on its own. The repository owns both and
//! holds them under a single lock so a store write and the matching index
//! update are observed together.

mod game_store;
mod player_index;

pub use game_store::GameStore;
pub use player_index::PlayerIndex;
