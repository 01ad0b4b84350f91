use crate::domain::game::GameState;
use crate::domain::snake::{Appearance, Direction};

// Port for the decision logic behind /start and /move.
pub trait SnakePolicy: Send + Sync {
    fn appearance(&self) -> Appearance;
    fn choose_move(&self, state: &GameState) -> Direction;
}

impl<T> SnakePolicy for std::sync::Arc<T>
where
    T: SnakePolicy + ?Sized,
{
    fn appearance(&self) -> Appearance {
        (**self).appearance()
    }

    fn choose_move(&self, state: &GameState) -> Direction {
        (**self).choose_move(state)
    }
}
