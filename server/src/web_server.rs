use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tower_http::cors::{Any, CorsLayer};

use common::games::SessionRng;
use common::games::tictactoe::{GameStatus, Mark, calculate_move, check_outcome};
use common::{debug_log, log};

use crate::api::{ApiError, MoveRequest, MoveResponse};
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub rng_seed: Option<u64>,
}

impl WebServerState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            rng_seed: config.rng_seed,
        }
    }

    fn session_rng(&self) -> SessionRng {
        match self.rng_seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }
}

pub fn build_router(state: WebServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/move", post(move_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server<F>(
    state: WebServerState,
    addr: SocketAddr,
    shutdown_signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log!("Move server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

async fn move_handler(
    State(state): State<WebServerState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log!("Rejected move request: {}", rejection.body_text());
        ApiError::invalid_request(rejection.body_text())
    })?;

    let mut rng = state.session_rng();
    let board = request.board;

    let cell = calculate_move(request.difficulty, &board, &mut rng).map_err(|e| {
        log!("No move for board {}: {}", board, e);
        ApiError::from(e)
    })?;

    debug_log!(
        "board {} difficulty {} seed {} -> move {}",
        board,
        request.difficulty.as_str(),
        rng.seed(),
        cell
    );

    let outcome = check_outcome(&board.with_mark(cell, Mark::O));
    if outcome == GameStatus::OWon {
        debug_log!("Move {} wins the game for O", cell);
    } else if outcome == GameStatus::Draw {
        debug_log!("Move {} ends the game in a draw", cell);
    }

    Ok(Json(MoveResponse { cell }))
}
