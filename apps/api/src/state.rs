use std::sync::Arc;

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::llm_client::ChatModel;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable chat model. Default: the Groq-backed `LlmClient`.
    pub llm: Arc<dyn ChatModel>,
    /// Read-only program and college catalogs, loaded once at startup.
    pub catalogs: Arc<Catalogs>,
    pub sessions: SessionStore,
    pub config: Config,
}
