//! Fixtures shared by the game history suites.

use chrono::{DateTime, Duration, Utc};
use game_history::{Game, GameResult};

pub fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Utc)
}

/// A rated 3+2 game between `white` and `black` that ended at `ended_at`.
pub fn game(id: &str, white: &str, black: &str, ended_at: &str) -> Game {
    let ended_at = ts(ended_at);
    Game {
        game_id: id.to_string(),
        white_player_id: white.to_string(),
        black_player_id: black.to_string(),
        white_rating_pre: 1500,
        white_rating_post: 1508,
        black_rating_pre: 1650,
        black_rating_post: 1642,
        time_control: "3+2".to_string(),
        variant: "standard".to_string(),
        mode: "RATED".to_string(),
        region: "eu-west".to_string(),
        platform: "web".to_string(),
        client_version: "1.4.0".to_string(),
        started_at: ended_at - Duration::minutes(12),
        ended_at,
        result: GameResult::WhiteWin,
        termination_reason: "checkmate".to_string(),
        moves: Vec::new(),
    }
}

/// The worked example: one game that ended at 2025-12-06T09:16:55Z.
pub fn december_game() -> Game {
    game("game-1", "p1", "p2", "2025-12-06T09:16:55Z")
}

/// Five games for `alice` with mixed modes, time controls and results,
/// seeded out of chronological order.
pub fn alice_history() -> Vec<Game> {
    let mut casual = game("casual-draw", "alice", "bob", "2025-12-05T18:00:00Z");
    casual.mode = "CASUAL".to_string();
    casual.result = GameResult::Draw;

    let mut bullet = game("bullet-win", "carol", "alice", "2025-12-07T08:00:00Z");
    bullet.time_control = "1+0".to_string();
    bullet.result = GameResult::BlackWin;

    let mut timeout = game("timeout", "alice", "dave", "2025-12-06T12:30:00Z");
    timeout.result = GameResult::Timeout;

    vec![
        game("blitz-win", "alice", "bob", "2025-12-06T10:00:00Z"),
        casual,
        bullet,
        game("blitz-loss", "erin", "alice", "2025-12-04T21:15:00Z"),
        timeout,
    ]
}
