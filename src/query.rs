//! Filter, sort and limit logic applied to repository reads.
//!
//! Everything here is a pure function over borrowed data, so it runs under
//! a shared read lock without touching repository state.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::filter::{ExportFilter, PlayerHistoryFilter};
use crate::game::{Game, PlayerGameSummary};

/// Case-insensitive equality, where an unset or empty expectation matches
/// anything.
fn matches_optional(expected: Option<&str>, actual: &str) -> bool {
    match expected {
        Some(expected) if !expected.is_empty() => expected.eq_ignore_ascii_case(actual),
        _ => true,
    }
}

fn limit_of(limit: i64) -> Option<usize> {
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

pub fn summary_matches(filter: &PlayerHistoryFilter, summary: &PlayerGameSummary) -> bool {
    matches_optional(filter.mode.as_deref(), &summary.mode)
        && matches_optional(filter.time_control.as_deref(), &summary.time_control)
        && matches_optional(filter.result.as_deref(), summary.result.as_str())
        && filter.since.map_or(true, |since| summary.ended_at >= since)
        && filter.until.map_or(true, |until| summary.ended_at <= until)
}

/// Apply `filter` to a player's history.
///
/// `entries` must already be sorted newest first, so the first `limit`
/// matches are the most recent ones and the scan stops there.
pub fn filter_player_history(
    entries: &[PlayerGameSummary],
    filter: &PlayerHistoryFilter,
) -> Vec<PlayerGameSummary> {
    let matching = entries
        .iter()
        .filter(|summary| summary_matches(filter, summary))
        .cloned();

    match limit_of(filter.limit) {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    }
}

fn rating_in_bounds(filter: &ExportFilter, rating: i32) -> bool {
    filter.min_rating.map_or(true, |min| rating >= min)
        && filter.max_rating.map_or(true, |max| rating <= max)
}

/// Whether `game` falls inside the `[from, to]` window and the optional
/// equality and rating constraints.
pub fn game_matches(
    filter: &ExportFilter,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    game: &Game,
) -> bool {
    game.ended_at >= from
        && game.ended_at <= to
        && matches_optional(filter.mode.as_deref(), &game.mode)
        && matches_optional(filter.time_control.as_deref(), &game.time_control)
        && matches_optional(filter.region.as_deref(), &game.region)
        && rating_in_bounds(filter, game.white_rating_pre)
        && rating_in_bounds(filter, game.black_rating_pre)
}

/// Newest first; equal end times fall back to game id so output is stable
/// regardless of storage iteration order.
fn newest_first(a: &Game, b: &Game) -> Ordering {
    b.ended_at
        .cmp(&a.ended_at)
        .then_with(|| a.game_id.cmp(&b.game_id))
}

/// Select, sort and truncate games for an export over the given window.
///
/// The caller checks that both bounds are present. A window with `from`
/// after `to` selects nothing.
pub fn export_games<'a>(
    games: impl Iterator<Item = &'a Game>,
    filter: &ExportFilter,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Game> {
    let mut selected: Vec<&Game> = games
        .filter(|game| game_matches(filter, from, to, game))
        .collect();
    selected.sort_by(|a, b| newest_first(a, b));

    if let Some(limit) = limit_of(filter.limit) {
        selected.truncate(limit);
    }

    selected.into_iter().cloned().collect()
}
