//! Application state.

use std::sync::Arc;

use tubescout_youtube::{SearchConfig, YoutubeClient};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub youtube: Arc<YoutubeClient>,
    pub search: SearchConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: AppConfig, youtube: YoutubeClient, search: SearchConfig) -> Self {
        Self {
            config,
            youtube: Arc::new(youtube),
            search,
        }
    }
}
