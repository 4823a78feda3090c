use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// One editing session per process. Mutations take the write lock; renders
/// clone the snapshot `Arc` and release the lock before laying anything out.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<ResumeStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            session: Arc::new(RwLock::new(ResumeStore::new(config.default_template))),
            config,
        }
    }
}
