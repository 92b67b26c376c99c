//! Shared application state passed to every handler via Axum's `State` extractor.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::processor::RequestProcessor;

/// Shared application state for the joked server.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Arc<Config>,
    /// Monotonic instant when the server started (for uptime calculation).
    pub start_time: Instant,
    /// The core request pipeline; stateless per call.
    pub processor: RequestProcessor,
}

impl AppState {
    /// Assemble the state from loaded configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let joke_client = crate::upstream::JokeClient::new(&config.upstream);
        let processor = RequestProcessor::new(Arc::clone(&config), joke_client);
        Self {
            config,
            start_time: Instant::now(),
            processor,
        }
    }
}
