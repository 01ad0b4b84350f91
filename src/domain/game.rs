use serde::{Deserialize, Deserializer};

// Game-state snapshot sent by the engine on /start, /move and /end.
// Bodies are not validated: missing or null fields fall back to defaults
// and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub game: Game,
    pub turn: i64,
    pub board: Board,
    pub you: Snake,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Board {
    pub height: i64,
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub food: Vec<Point>,
    #[serde(deserialize_with = "null_as_default")]
    pub snakes: Vec<Snake>,
}

// Grid coordinate with the origin in the bottom-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Snake {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub health: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub body: Vec<Point>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
