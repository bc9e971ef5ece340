use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profiles and saved jobs. `PgStore` in production, `MemoryStore` in tests.
    pub store: Arc<dyn ProfileStore>,
    pub llm: LlmClient,
}
