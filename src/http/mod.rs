//! HTTP transport - maps the game history API onto a repository.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /game-history/v1/health` - store readiness plus service metadata.
//! - `GET /game-history/v1/games/:game_id` - a single game with its moves.
//! - `GET /game-history/v1/players/:player_id/games` - a player's history feed.
//! - `GET /game-history/v1/export/games` - games that ended in `[from, to]`.
//!
//! Any other method on these paths gets `405` with an empty body, `HEAD`
//! included.
//!
//! ## Example
//!
//! ```ignore
//! use game_history::{http, Config, InMemoryRepository};
//!
//! let repo = InMemoryRepository::with_games(game_history::seed::sample_games())?;
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(http::AppState::new(Config::default(), repo.clone()));
//!
//! // Or serve directly
//! http::serve(Config::default(), repo).await?;
//! ```

mod error;
mod handlers;
mod params;

use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tracing::{info, warn};

use crate::config::Config;
use crate::repository::GameHistoryRepository;

pub use error::ApiError;
pub use params::{
    ExportParams, ExportRequest, PlayerGamesParams, EXPORT_DEFAULT_LIMIT,
    PLAYER_HISTORY_DEFAULT_LIMIT,
};

pub const BASE_PATH: &str = "/game-history/v1";

/// Shared handler state: the repository and the startup configuration.
pub struct AppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<Config>,
}

impl<R> AppState<R> {
    pub fn new(config: Config, repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Build an axum `Router` serving the game history API from `state`.
pub fn router<R>(state: AppState<R>) -> Router
where
    R: GameHistoryRepository + Send + Sync + 'static,
{
    let api = Router::new()
        .route("/health", read_only(handlers::health::<R>))
        .route("/games/", read_only(handlers::missing_game_id))
        .route("/games/:game_id", read_only(handlers::get_game::<R>))
        .route(
            "/players/:player_id/games",
            read_only(handlers::list_player_games::<R>),
        )
        .route("/export/games", read_only(handlers::export_games::<R>))
        .with_state(state);

    Router::new().nest(BASE_PATH, api)
}

/// GET only. axum answers `HEAD` through a GET route unless the route has
/// its own `HEAD` handler, so one is registered that always refuses.
fn read_only<H, T, S>(handler: H) -> MethodRouter<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    get(handler).head(handlers::method_not_allowed)
}

/// Serve the API over HTTP on `config.listen_addr()` until ctrl-c.
pub async fn serve<R>(config: Config, repo: R) -> Result<(), std::io::Error>
where
    R: GameHistoryRepository + Send + Sync + 'static,
{
    let addr = config.listen_addr();
    let app = router(AppState::new(config, repo));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "game history api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
