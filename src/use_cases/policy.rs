use crate::domain::{Appearance, Direction, GameState, SnakePolicy};

pub const DEFAULT_COLOR: &str = "#ff00ff";
pub const DEFAULT_HEAD_TYPE: &str = "bendr";
pub const DEFAULT_TAIL_TYPE: &str = "pixel";
pub const DEFAULT_DIRECTION: Direction = Direction::Right;

// Policy that ignores the board and always answers with the same values.
#[derive(Clone, Debug)]
pub struct FixedPolicy {
    pub appearance: Appearance,
    pub direction: Direction,
}

impl Default for FixedPolicy {
    fn default() -> Self {
        Self {
            appearance: Appearance {
                color: DEFAULT_COLOR.to_string(),
                head_type: DEFAULT_HEAD_TYPE.to_string(),
                tail_type: DEFAULT_TAIL_TYPE.to_string(),
            },
            direction: DEFAULT_DIRECTION,
        }
    }
}

impl SnakePolicy for FixedPolicy {
    fn appearance(&self) -> Appearance {
        self.appearance.clone()
    }

    fn choose_move(&self, _state: &GameState) -> Direction {
        self.direction
    }
}
