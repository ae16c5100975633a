use std::sync::Arc;

use crate::catalog::Catalog;
use crate::cv::CvAnalyzer;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable CV analyzer. Default: LocalCvAnalyzer. Swap via CV_ANALYZER_URL.
    pub analyzer: Arc<dyn CvAnalyzer>,
    /// Per-user profile storage. Default: MemoryStore. Swap via REDIS_URL.
    pub store: Arc<dyn ProfileStore>,
    pub catalog: Arc<Catalog>,
}

#[cfg(test)]
impl AppState {
    /// Local analyzer, in-memory store, built-in catalog.
    pub fn for_tests() -> Self {
        let catalog = Catalog::builtin();
        AppState {
            analyzer: Arc::new(crate::cv::LocalCvAnalyzer::new(catalog.courses.clone()).unwrap()),
            store: Arc::new(crate::store::MemoryStore::new()),
            catalog: Arc::new(catalog),
        }
    }
}
