use std::sync::Arc;

use crate::comparison::store::ResultStore;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never replaced.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
    pub store: Arc<dyn ResultStore>,
}
