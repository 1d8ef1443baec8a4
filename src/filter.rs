//! Query filters for player history feeds and bulk exports.
//!
//! Filters are plain values built by the caller and handed to the repository.
//! Unset fields do not constrain the result, and neither does an empty
//! string. A `limit` of zero or less means "no limit".

use chrono::{DateTime, Utc};

/// Constraints on a player's history feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHistoryFilter {
    pub mode: Option<String>,
    pub time_control: Option<String>,
    pub result: Option<String>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub limit: i64,
}

impl PlayerHistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn time_control(mut self, time_control: impl Into<String>) -> Self {
        self.time_control = Some(time_control.into());
        self
    }

    /// Match on the player's own result (`WIN`, `LOSS`, ...), case-insensitive.
    pub fn result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

/// Constraints on a bulk export. `from` and `to` are required by the
/// repository; they are optional here only so a missing window can be
/// reported as a validation error instead of defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub mode: Option<String>,
    pub time_control: Option<String>,
    pub region: Option<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub limit: i64,
}

impl ExportFilter {
    /// Export window covering `[from, to]` inclusive.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn time_control(mut self, time_control: impl Into<String>) -> Self {
        self.time_control = Some(time_control.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Both players' pre-game ratings must be at least `min`.
    pub fn min_rating(mut self, min: i32) -> Self {
        self.min_rating = Some(min);
        self
    }

    /// Both players' pre-game ratings must be at most `max`.
    pub fn max_rating(mut self, max: i32) -> Self {
        self.max_rating = Some(max);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}
