//! Text extraction
//!
//! One linear pass: read the source, get raw text for every page from the
//! configured backend, normalize each page, join in document order.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Engine, ExtractOptions};
use crate::error::Result;
use crate::normalize::{join_pages, normalize_page};

/// Normalized text of a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page text after normalization; empty when the page has no text layer
    pub text: String,
}

/// Result of one extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Backend that produced the raw text
    pub engine: Engine,

    /// Normalized pages in document order
    pub pages: Vec<PageText>,

    /// All pages joined with the page separator
    pub text: String,
}

impl ExtractedDocument {
    fn from_pages(engine: Engine, pages: Vec<PageText>) -> Self {
        let text = join_pages(&pages.iter().map(|p| p.text.as_str()).collect::<Vec<_>>());
        Self {
            engine,
            pages,
            text,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages that produced no text at all
    pub fn empty_page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.text.is_empty()).count()
    }
}

/// Extracts plain text from PDF sources
///
/// Holds no state besides its options; one extractor can serve any number of
/// calls, and each call owns its source and buffers.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    options: ExtractOptions,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract normalized text from any sequential byte source
    pub fn extract<R: Read>(&self, reader: R) -> Result<String> {
        Ok(self.extract_document(reader)?.text)
    }

    /// Extract normalized text from PDF bytes already in memory
    pub fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        Ok(self.extract_document_bytes(data)?.text)
    }

    /// Open `path`, extract its text and close it again
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        Ok(self.extract_document_file(path)?.text)
    }

    /// Like [`TextExtractor::extract_file`], keeping the per-page breakdown
    pub fn extract_document_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedDocument> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening PDF");
        let file = File::open(path)?;
        self.extract_document(file)
    }

    /// Like [`TextExtractor::extract`], keeping the per-page breakdown
    pub fn extract_document<R: Read>(&self, mut reader: R) -> Result<ExtractedDocument> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.extract_document_bytes(&data)
    }

    /// Like [`TextExtractor::extract_bytes`], keeping the per-page breakdown
    pub fn extract_document_bytes(&self, data: &[u8]) -> Result<ExtractedDocument> {
        let engine = self.options.engine;
        let backend = engine.backend();
        let raw_pages = backend.page_texts(data)?;

        let pages: Vec<PageText> = raw_pages
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                let text = normalize_page(raw);
                debug!(
                    page = idx + 1,
                    raw_len = raw.len(),
                    normalized_len = text.len(),
                    "normalized page"
                );
                PageText {
                    number: idx as u32 + 1,
                    text,
                }
            })
            .collect();

        let document = ExtractedDocument::from_pages(engine, pages);
        info!(
            engine = %engine,
            pages = document.page_count(),
            empty_pages = document.empty_page_count(),
            chars = document.text.chars().count(),
            "extracted PDF text"
        );

        Ok(document)
    }
}
