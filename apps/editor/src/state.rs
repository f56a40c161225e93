use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend_client::ResumeBackend;
use crate::config::Config;
use crate::session::EditorSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editing session. Handlers lock it for a single operation and
    /// never hold it across a backend call.
    pub session: Arc<Mutex<EditorSession>>,
    /// Pluggable backend. Default: `HttpBackend`.
    pub backend: Arc<dyn ResumeBackend>,
    pub config: Config,
}

impl AppState {
    pub fn new(backend: Arc<dyn ResumeBackend>, config: Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(EditorSession::new())),
            backend,
            config,
        }
    }
}
