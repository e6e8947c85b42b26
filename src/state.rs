use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::AppConfig;
use crate::domain::humanize::client::AiClient;

/// Shared application state, immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub ai_client: AiClient,
    /// Pre-formatted tag enumeration used by the prompt composer.
    /// Empty when no catalog file could be loaded.
    pub tag_catalog: Arc<String>,
    /// Bounds concurrent upstream generation calls.
    pub generation_permits: Arc<Semaphore>,
}
