//! Shared application state.
//!
//! `AppState` carries the parsed host configuration into router assembly.
//! Handlers that need a narrower slice (the frames directory) get it as
//! their own router state.

use std::sync::Arc;

use crate::config::WebConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<WebConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
