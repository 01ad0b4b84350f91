use serde::Serialize;

// Movement direction understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

// Cosmetic customization returned when a game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub color: String,
    pub head_type: String,
    pub tail_type: String,
}
