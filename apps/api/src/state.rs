use std::sync::Arc;

use crate::coverage::engine::KeywordCoverageEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable after startup; shared across handlers without locking.
    pub engine: Arc<KeywordCoverageEngine>,
}
