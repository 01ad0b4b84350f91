// Use cases layer: per-request workflows for the snake server.

pub mod policy;
pub mod turns;

#[cfg(test)]
pub(crate) mod test_support;

pub use policy::FixedPolicy;
pub use turns::{MoveUseCase, StartGameUseCase};
