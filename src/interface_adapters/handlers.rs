use crate::domain::GameState;
use crate::interface_adapters::protocol::{MoveResponse, StartResponse, decode_game_state};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{MoveUseCase, StartGameUseCase};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{Span, field};

// Decode the body and attach its identity to the current span.
fn traced_state(body: &[u8]) -> GameState {
    let state = decode_game_state(body);
    let span = Span::current();
    span.record("game_id", state.game.id.as_str());
    span.record("turn", state.turn);
    state
}

// Handler for the start of a game: answers with the snake's appearance.
#[tracing::instrument(
    name = "start",
    skip_all,
    fields(game_id = field::Empty, turn = field::Empty)
)]
pub async fn start(State(state): State<Arc<AppState>>, body: Bytes) -> Json<StartResponse> {
    let game = traced_state(&body);
    let use_case = StartGameUseCase {
        policy: state.policy.clone(),
    };
    let result = use_case.execute(&game);

    tracing::info!(snakes = game.board.snakes.len(), "game started");

    Json(StartResponse::from(result.appearance))
}

// Handler for a single turn: answers with the chosen direction.
#[tracing::instrument(
    name = "move",
    skip_all,
    fields(game_id = field::Empty, turn = field::Empty)
)]
pub async fn make_move(State(state): State<Arc<AppState>>, body: Bytes) -> Json<MoveResponse> {
    let game = traced_state(&body);
    let use_case = MoveUseCase {
        policy: state.policy.clone(),
    };
    let result = use_case.execute(&game);

    tracing::debug!(direction = result.direction.as_str(), "move chosen");

    Json(MoveResponse {
        direction: result.direction,
    })
}

// Handler for the end of a game; the payload is only logged.
#[tracing::instrument(
    name = "end",
    skip_all,
    fields(game_id = field::Empty, turn = field::Empty)
)]
pub async fn end(body: Bytes) -> StatusCode {
    traced_state(&body);
    tracing::info!("game ended");
    StatusCode::OK
}

// Health check used by the engine; any body is ignored.
pub async fn ping() -> StatusCode {
    StatusCode::OK
}
