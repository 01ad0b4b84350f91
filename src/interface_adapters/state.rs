use crate::domain::SnakePolicy;
use crate::use_cases::FixedPolicy;
use std::sync::Arc;

// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<dyn SnakePolicy>,
}

impl AppState {
    pub fn new(policy: Arc<dyn SnakePolicy>) -> Self {
        Self { policy }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(FixedPolicy::default()))
    }
}
