use std::sync::{Arc, Mutex};

use crate::domain::{Appearance, Board, Direction, Game, GameState, Point, Snake, SnakePolicy};
use crate::use_cases::policy::FixedPolicy;

// Snapshot matching the engine's documented example payload.
pub(crate) fn sample_state() -> GameState {
    let you = Snake {
        id: "s1".to_string(),
        name: "Sneky Snek".to_string(),
        health: 90,
        body: vec![Point { x: 1, y: 3 }],
    };

    GameState {
        game: Game {
            id: "g1".to_string(),
        },
        turn: 4,
        board: Board {
            height: 15,
            width: 15,
            food: vec![Point { x: 1, y: 3 }],
            snakes: vec![you.clone()],
        },
        you,
    }
}

// Policy fake that records the turn of every state it is asked about.
#[derive(Clone)]
pub(crate) struct RecordingPolicy {
    direction: Direction,
    turns: Arc<Mutex<Vec<i64>>>,
}

impl RecordingPolicy {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            turns: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn seen_turns(&self) -> Vec<i64> {
        self.turns.lock().expect("turns mutex poisoned").clone()
    }
}

impl SnakePolicy for RecordingPolicy {
    fn appearance(&self) -> Appearance {
        FixedPolicy::default().appearance
    }

    fn choose_move(&self, state: &GameState) -> Direction {
        let mut guard = self.turns.lock().expect("turns mutex poisoned");
        guard.push(state.turn);
        self.direction
    }
}
