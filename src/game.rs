//! Game records and the per-player projections derived from them.
//!
//! `Game` is the canonical record owned by the game store. `PlayerGameSummary`
//! is a read-only view of one game from one participant's perspective; two of
//! them are derived for every stored game.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which colour a player had in a game, or which side made a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::White => "WHITE",
            Side::Black => "BLACK",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a game as recorded by the game server.
///
/// Values the service does not know about are kept verbatim in
/// `Unrecognized` so they survive a read back through the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
    Aborted,
    Timeout,
    Unrecognized(String),
}

impl GameResult {
    pub fn as_str(&self) -> &str {
        match self {
            GameResult::WhiteWin => "WHITE_WIN",
            GameResult::BlackWin => "BLACK_WIN",
            GameResult::Draw => "DRAW",
            GameResult::Aborted => "ABORTED",
            GameResult::Timeout => "TIMEOUT",
            GameResult::Unrecognized(raw) => raw,
        }
    }

    /// Result of this game from the point of view of the player on `role`.
    ///
    /// `Timeout` maps to a loss for both sides. The record does not say who
    /// ran out of time, so neither side can be credited with the win.
    pub fn for_side(&self, role: Side) -> PlayerResult {
        match (self, role) {
            (GameResult::WhiteWin, Side::White) | (GameResult::BlackWin, Side::Black) => {
                PlayerResult::Win
            }
            (GameResult::WhiteWin, Side::Black) | (GameResult::BlackWin, Side::White) => {
                PlayerResult::Loss
            }
            (GameResult::Draw, _) => PlayerResult::Draw,
            (GameResult::Aborted, _) => PlayerResult::Aborted,
            (GameResult::Timeout, _) => PlayerResult::Loss,
            (GameResult::Unrecognized(_), _) => PlayerResult::Unknown,
        }
    }
}

impl From<String> for GameResult {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "WHITE_WIN" => GameResult::WhiteWin,
            "BLACK_WIN" => GameResult::BlackWin,
            "DRAW" => GameResult::Draw,
            "ABORTED" => GameResult::Aborted,
            "TIMEOUT" => GameResult::Timeout,
            _ => GameResult::Unrecognized(raw),
        }
    }
}

impl From<&str> for GameResult {
    fn from(raw: &str) -> Self {
        GameResult::from(raw.to_string())
    }
}

impl From<GameResult> for String {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game's outcome from one participant's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerResult {
    Win,
    Loss,
    Draw,
    Aborted,
    Unknown,
}

impl PlayerResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerResult::Win => "WIN",
            PlayerResult::Loss => "LOSS",
            PlayerResult::Draw => "DRAW",
            PlayerResult::Aborted => "ABORTED",
            PlayerResult::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ply of a recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub move_number: u32,
    pub side: Side,
    pub san: String,
    pub uci: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fen_after: Option<String>,
    pub played_at: DateTime<Utc>,
    pub white_clock_after_ms: i64,
    pub black_clock_after_ms: i64,
}

/// Canonical record of a finished game, keyed by `game_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: String,
    pub white_player_id: String,
    pub black_player_id: String,
    pub white_rating_pre: i32,
    pub white_rating_post: i32,
    pub black_rating_pre: i32,
    pub black_rating_post: i32,
    pub time_control: String,
    pub variant: String,
    pub mode: String,
    pub region: String,
    pub platform: String,
    pub client_version: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub result: GameResult,
    pub termination_reason: String,
    #[serde(default)]
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameValidationError {
    #[error("game id is empty")]
    MissingId,
    #[error("game {game_id} is missing a {side} player id")]
    MissingPlayer { game_id: String, side: Side },
    #[error("game {game_id} ends before it starts")]
    EndsBeforeStart { game_id: String },
}

impl Game {
    /// Check the invariants a game must satisfy before it is stored.
    pub fn validate(&self) -> Result<(), GameValidationError> {
        if self.game_id.is_empty() {
            return Err(GameValidationError::MissingId);
        }
        for side in [Side::White, Side::Black] {
            if self.player_id(side).is_empty() {
                return Err(GameValidationError::MissingPlayer {
                    game_id: self.game_id.clone(),
                    side,
                });
            }
        }
        if self.ended_at < self.started_at {
            return Err(GameValidationError::EndsBeforeStart {
                game_id: self.game_id.clone(),
            });
        }
        Ok(())
    }

    pub fn player_id(&self, side: Side) -> &str {
        match side {
            Side::White => &self.white_player_id,
            Side::Black => &self.black_player_id,
        }
    }

    /// `(pre, post)` ratings of the player on `side`.
    pub fn ratings(&self, side: Side) -> (i32, i32) {
        match side {
            Side::White => (self.white_rating_pre, self.white_rating_post),
            Side::Black => (self.black_rating_pre, self.black_rating_post),
        }
    }

    /// Project this game onto the participant playing `role`.
    pub fn summary_for(&self, role: Side) -> PlayerGameSummary {
        let opponent = role.opponent();
        let (opponent_rating_pre, opponent_rating_post) = self.ratings(opponent);
        PlayerGameSummary {
            game_id: self.game_id.clone(),
            role,
            ended_at: self.ended_at,
            mode: self.mode.clone(),
            time_control: self.time_control.clone(),
            result: self.result.for_side(role),
            opponent_id: self.player_id(opponent).to_string(),
            opponent_rating_pre,
            opponent_rating_post,
        }
    }
}

/// A single entry in a player's history feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameSummary {
    pub game_id: String,
    pub role: Side,
    pub ended_at: DateTime<Utc>,
    pub mode: String,
    pub time_control: String,
    pub result: PlayerResult,
    pub opponent_id: String,
    pub opponent_rating_pre: i32,
    pub opponent_rating_post: i32,
}
