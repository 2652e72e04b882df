use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::scoring::ScoringEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup; shared across requests without locking.
    pub engine: Arc<ScoringEngine>,
    /// Pluggable extractor. Default: DocumentExtractor (PDF + DOCX).
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Config,
}
