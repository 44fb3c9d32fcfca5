use std::sync::Arc;

use framelabel_core::catalog::VideoCatalog;
use framelabel_core::config::StorageConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Frame and annotation stores rooted at the resolved directories.
    pub catalog: Arc<VideoCatalog>,
}

impl AppState {
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            catalog: Arc::new(VideoCatalog::from_config(storage)),
        }
    }
}
