use crate::domain::{Appearance, Direction, GameState, SnakePolicy};

// Response returned by the start use case.
pub struct StartGameResponse {
    pub appearance: Appearance,
}

// Response returned by the move use case.
pub struct MoveResponse {
    pub direction: Direction,
}

// Start-of-game use case with an injected policy.
pub struct StartGameUseCase<P> {
    pub policy: P,
}

impl<P> StartGameUseCase<P>
where
    P: SnakePolicy,
{
    pub fn execute(&self, _state: &GameState) -> StartGameResponse {
        StartGameResponse {
            appearance: self.policy.appearance(),
        }
    }
}

// Per-turn move use case with an injected policy.
pub struct MoveUseCase<P> {
    pub policy: P,
}

impl<P> MoveUseCase<P>
where
    P: SnakePolicy,
{
    pub fn execute(&self, state: &GameState) -> MoveResponse {
        MoveResponse {
            direction: self.policy.choose_move(state),
        }
    }
}
