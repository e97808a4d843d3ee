/// Shared application state
use crate::handler::UserRequestHandler;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRequestHandler>,
}

impl AppState {
    pub fn new(users: Arc<UserRequestHandler>) -> Self {
        Self { users }
    }
}
