use std::sync::Arc;

use tokio::sync::RwLock;

use crate::engine::MatchingEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state, replaced wholesale on catalog reload so concurrent
/// readers never observe a partially built index
pub struct AppStateInner {
    /// The built matching engine; read-only between reloads
    pub engine: MatchingEngine,
    /// Where the catalog was loaded from, for reloads
    pub catalog_path: String,
}

impl AppState {
    /// Wraps a built engine as shared state
    pub fn new(engine: MatchingEngine, catalog_path: String) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                engine,
                catalog_path,
            })),
        }
    }
}
