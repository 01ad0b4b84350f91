// Domain layer: Battlesnake wire entities and the policy port.

pub mod game;
pub mod ports;
pub mod snake;

pub use game::{Board, Game, GameState, Point, Snake};
pub use ports::SnakePolicy;
pub use snake::{Appearance, Direction};
