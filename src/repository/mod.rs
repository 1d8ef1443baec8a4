//! Repository contract consumed by the HTTP layer, and its in-memory
//! implementation.
//!
//! The contract is split into one trait per operation, the same way reads
//! and writes are split elsewhere in the crate, and recombined into
//! [`GameHistoryRepository`]. Alternative backends only need to implement
//! the four read traits.

mod error;
mod in_memory;
mod repository;

pub use error::RepositoryError;
pub use in_memory::InMemoryRepository;
pub use repository::{
    ExportGames, GameHistoryRepository, GetGame, HealthCheck, HealthStatus, ListPlayerGames,
    PlayerGamesPage,
};
