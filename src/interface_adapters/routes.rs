use crate::interface_adapters::handlers::{end, make_move, ping, start};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};
use std::sync::Arc;

// Build the HTTP router for the Battlesnake engine endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start))
        .route("/move", post(make_move))
        .route("/end", post(end))
        .route("/ping", post(ping))
        .with_state(state)
}
