//! Bootstrap data for the in-memory repository.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use thiserror::Error;

use crate::game::{Game, GameResult, Move, Side};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON array of games from `path`.
pub fn load_games(path: &Path) -> Result<Vec<Game>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn ply(
    move_number: u32,
    side: Side,
    san: &str,
    uci: &str,
    played_at: DateTime<Utc>,
    clocks: (i64, i64),
) -> Move {
    Move {
        move_number,
        side,
        san: san.to_string(),
        uci: uci.to_string(),
        fen_after: None,
        played_at,
        white_clock_after_ms: clocks.0,
        black_clock_after_ms: clocks.1,
    }
}

/// Games served by a local instance when no seed file is configured.
pub fn sample_games() -> Vec<Game> {
    // Fixed literal; `with_ymd_and_hms` only fails on out-of-range fields.
    let started = Utc.with_ymd_and_hms(2025, 12, 6, 9, 5, 12).unwrap();
    let ended = started + Duration::seconds(703);

    let mut scholars_mate = vec![
        ply(1, Side::White, "e4", "e2e4", started + Duration::seconds(2), (180_000, 180_000)),
        ply(1, Side::Black, "e5", "e7e5", started + Duration::seconds(4), (180_000, 179_000)),
        ply(2, Side::White, "Qh5", "d1h5", started + Duration::seconds(9), (177_000, 179_000)),
        ply(2, Side::Black, "Nc6", "b8c6", started + Duration::seconds(15), (177_000, 175_000)),
        ply(3, Side::White, "Bc4", "f1c4", started + Duration::seconds(18), (176_000, 175_000)),
        ply(3, Side::Black, "Nf6", "g8f6", started + Duration::seconds(30), (176_000, 165_000)),
        ply(4, Side::White, "Qxf7#", "h5f7", started + Duration::seconds(33), (175_000, 165_000)),
    ];
    if let Some(last) = scholars_mate.last_mut() {
        last.fen_after =
            Some("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4".into());
    }

    let rematch_start = ended + Duration::minutes(3);

    vec![
        Game {
            game_id: "game-0001".into(),
            white_player_id: "player-alice".into(),
            black_player_id: "player-bob".into(),
            white_rating_pre: 1512,
            white_rating_post: 1520,
            black_rating_pre: 1498,
            black_rating_post: 1490,
            time_control: "3+2".into(),
            variant: "standard".into(),
            mode: "RATED".into(),
            region: "eu-west".into(),
            platform: "web".into(),
            client_version: "1.4.0".into(),
            started_at: started,
            ended_at: ended,
            result: GameResult::WhiteWin,
            termination_reason: "checkmate".into(),
            moves: scholars_mate,
        },
        Game {
            game_id: "game-0002".into(),
            white_player_id: "player-bob".into(),
            black_player_id: "player-alice".into(),
            white_rating_pre: 1490,
            white_rating_post: 1490,
            black_rating_pre: 1520,
            black_rating_post: 1520,
            time_control: "3+2".into(),
            variant: "standard".into(),
            mode: "CASUAL".into(),
            region: "eu-west".into(),
            platform: "ios".into(),
            client_version: "1.4.0".into(),
            started_at: rematch_start,
            ended_at: rematch_start + Duration::minutes(9),
            result: GameResult::Draw,
            termination_reason: "agreement".into(),
            moves: Vec::new(),
        },
    ]
}
