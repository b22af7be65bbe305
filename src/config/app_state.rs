use std::sync::Arc;

use crate::config::AppConfig;
use crate::queue::QueueManager;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Job queue and its worker
    pub jobs: Arc<QueueManager>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(jobs: Arc<QueueManager>, config: AppConfig) -> Self {
        Self {
            jobs,
            config: Arc::new(config),
        }
    }
}
