//! Query-string parsing for the history and export endpoints.
//!
//! Every parameter arrives as an optional string. Empty values count as
//! absent, and a malformed or non-positive `limit` falls back to the
//! endpoint default instead of failing the request.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::filter::{ExportFilter, PlayerHistoryFilter};

use super::error::ApiError;

pub const PLAYER_HISTORY_DEFAULT_LIMIT: i64 = 20;
pub const EXPORT_DEFAULT_LIMIT: i64 = 1000;

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

pub fn parse_limit(raw: Option<&str>, fallback: i64) -> i64 {
    match raw.and_then(|value| value.parse::<i64>().ok()) {
        Some(limit) if limit > 0 => limit,
        _ => fallback,
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_with_offset(raw).map(|parsed| parsed.with_timezone(&Utc))
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Optional RFC3339 timestamp; `message` is the error reported when the
/// value is present but malformed.
fn optional_timestamp(
    raw: Option<String>,
    message: &str,
) -> Result<Option<DateTime<Utc>>, ApiError> {
    match non_empty(raw) {
        Some(value) => parse_timestamp(&value)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(message)),
        None => Ok(None),
    }
}

/// `?mode=&timeControl=&result=&since=&until=&limit=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGamesParams {
    pub mode: Option<String>,
    pub time_control: Option<String>,
    pub result: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub limit: Option<String>,
}

impl PlayerGamesParams {
    pub fn into_filter(self) -> Result<PlayerHistoryFilter, ApiError> {
        Ok(PlayerHistoryFilter {
            limit: parse_limit(self.limit.as_deref(), PLAYER_HISTORY_DEFAULT_LIMIT),
            since: optional_timestamp(self.since, "invalid since timestamp")?,
            until: optional_timestamp(self.until, "invalid until timestamp")?,
            mode: non_empty(self.mode),
            time_control: non_empty(self.time_control),
            result: non_empty(self.result),
        })
    }
}

/// `?from=&to=&mode=&timeControl=&region=&minRating=&maxRating=&limit=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub mode: Option<String>,
    pub time_control: Option<String>,
    pub region: Option<String>,
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    pub limit: Option<String>,
}

/// A validated export request.
///
/// `from` and `to` keep the offset the caller sent so the response can echo
/// them back unchanged; `filter` holds the same instants in UTC.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
    pub filter: ExportFilter,
}

impl ExportParams {
    pub fn into_request(self) -> Result<ExportRequest, ApiError> {
        let (from, to) = match (non_empty(self.from), non_empty(self.to)) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(ApiError::bad_request("from and to parameters are required")),
        };
        let from = parse_with_offset(&from)
            .ok_or_else(|| ApiError::bad_request("from must be RFC3339"))?;
        let to =
            parse_with_offset(&to).ok_or_else(|| ApiError::bad_request("to must be RFC3339"))?;

        let filter = ExportFilter {
            from: Some(from.with_timezone(&Utc)),
            to: Some(to.with_timezone(&Utc)),
            mode: non_empty(self.mode),
            time_control: non_empty(self.time_control),
            region: non_empty(self.region),
            min_rating: self.min_rating.and_then(|raw| raw.parse().ok()),
            max_rating: self.max_rating.and_then(|raw| raw.parse().ok()),
            limit: parse_limit(self.limit.as_deref(), EXPORT_DEFAULT_LIMIT),
        };
        Ok(ExportRequest { from, to, filter })
    }
}
