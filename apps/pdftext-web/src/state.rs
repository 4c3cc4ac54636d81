//! Application state for the upload server

use pdftext_core::{ExtractOptions, TextExtractor};

use crate::config::WebConfig;

/// Immutable per-process state; every request gets its own buffers
pub struct AppState {
    pub config: WebConfig,
    pub extractor: TextExtractor,
}

impl AppState {
    pub fn new(config: WebConfig) -> Self {
        let extractor = TextExtractor::with_options(ExtractOptions::with_engine(config.engine));
        Self { config, extractor }
    }
}
