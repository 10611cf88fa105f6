use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::InterviewStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store for interviews and feedback. Postgres in production,
    /// in-memory in tests.
    pub store: Arc<dyn InterviewStore>,
    pub llm: LlmClient,
}
