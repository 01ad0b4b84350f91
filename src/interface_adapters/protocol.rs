use crate::domain::{Appearance, Direction, GameState};
use serde::Serialize;

// Best-effort decode of an engine request body. The body never decides the
// response, so anything that is not a game-state object yields the default.
pub fn decode_game_state(body: &[u8]) -> GameState {
    if body.is_empty() {
        return GameState::default();
    }

    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring undecodable request body");
        GameState::default()
    })
}

// Response payload for /start.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub color: String,
    pub head_type: String,
    pub tail_type: String,
}

impl From<Appearance> for StartResponse {
    fn from(appearance: Appearance) -> Self {
        Self {
            color: appearance.color,
            head_type: appearance.head_type,
            tail_type: appearance.tail_type,
        }
    }
}

// Response payload for /move.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
}
