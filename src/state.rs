use crate::config::Config;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Built once during initialization and handed to the router; the routing
/// table derived from it is read-only for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
