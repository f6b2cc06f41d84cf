//! Global application state.
//!
//! Shared by every request handler.

use super::config::Config;
use crate::core::greeting::greeting_service::GreetingService;
use std::sync::Arc;

/// Global application state.
#[derive(Clone, Debug)]
pub struct AppState {
    config: Arc<Config>,
    greeting: GreetingService,
}

impl AppState {
    /// Constructs a new [`AppState`].
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            greeting: GreetingService::new(),
        }
    }

    /// Returns the application configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the greeting service.
    pub fn greeting(&self) -> &GreetingService {
        &self.greeting
    }
}
