//! Request handlers. Each one parses its parameters, makes a single
//! repository call and shapes the JSON response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::debug;

use crate::game::{Game, PlayerGameSummary};
use crate::repository::{GameHistoryRepository, HealthStatus};

use super::error::ApiError;
use super::params::{ExportParams, PlayerGamesParams};
use super::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HealthResponse {
    status: &'static str,
    service: String,
    environment: String,
    service_version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PlayerGamesResponse {
    player_id: String,
    games: Vec<PlayerGameSummary>,
    next_cursor: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ExportResponse {
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
    count: usize,
    games: Vec<Game>,
}

/// `GET /health`
pub(super) async fn health<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<HealthResponse>, ApiError>
where
    R: GameHistoryRepository + Send + Sync + 'static,
{
    if let HealthStatus::Degraded(reason) = state.repo.health() {
        return Err(ApiError::Unavailable(reason));
    }

    let config = &state.config;
    Ok(Json(HealthResponse {
        status: "ok",
        service: config.service_name.clone(),
        environment: config.environment.clone(),
        service_version: config.version.clone(),
    }))
}

/// `GET /games/` - the id segment is empty.
pub(super) async fn missing_game_id() -> ApiError {
    ApiError::bad_request("gameId is required")
}

/// `HEAD` on any route.
pub(super) async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// `GET /games/:game_id`
pub(super) async fn get_game<R>(
    State(state): State<AppState<R>>,
    Path(game_id): Path<String>,
) -> Result<Json<Game>, ApiError>
where
    R: GameHistoryRepository + Send + Sync + 'static,
{
    if game_id.is_empty() {
        return Err(ApiError::bad_request("gameId is required"));
    }

    match state.repo.get_game(&game_id)? {
        Some(game) => Ok(Json(game)),
        None => {
            debug!(%game_id, "game not found");
            Err(ApiError::NotFound("game not found".into()))
        }
    }
}

/// `GET /players/:player_id/games`
pub(super) async fn list_player_games<R>(
    State(state): State<AppState<R>>,
    Path(player_id): Path<String>,
    Query(params): Query<PlayerGamesParams>,
) -> Result<Json<PlayerGamesResponse>, ApiError>
where
    R: GameHistoryRepository + Send + Sync + 'static,
{
    let filter = params.into_filter()?;
    let page = state.repo.list_player_games(&player_id, &filter)?;

    Ok(Json(PlayerGamesResponse {
        player_id,
        games: page.games,
        next_cursor: page.next_cursor,
    }))
}

/// `GET /export/games`
pub(super) async fn export_games<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ExportParams>,
) -> Result<Json<ExportResponse>, ApiError>
where
    R: GameHistoryRepository + Send + Sync + 'static,
{
    let request = params.into_request()?;
    let games = state.repo.export_games(&request.filter)?;

    Ok(Json(ExportResponse {
        from: request.from,
        to: request.to,
        count: games.len(),
        games,
    }))
}
