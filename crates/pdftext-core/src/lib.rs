//! Plain-text extraction from PDF documents
//!
//! Opens a PDF, walks its pages in document order, extracts raw text per page,
//! collapses runs of line breaks, trims each page and joins the pages with a
//! blank line.
//!
//! ```no_run
//! fn print_text(path: &str) -> Result<(), pdftext_core::ExtractionError> {
//!     let text = pdftext_core::extract_file(path)?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! Two page backends are available:
//! - `Engine::Native`: lopdf content-stream extraction (default)
//! - `Engine::Layout`: pdf-extract, which positions glyphs before emitting text

pub mod backend;
pub mod config;
pub mod error;
pub mod extract;
pub mod normalize;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use backend::{LayoutBackend, NativeBackend, PageTextBackend};
pub use config::{Engine, ExtractOptions, ParseEngineError};
pub use error::{ErrorKind, ExtractionError, Result};
pub use extract::{ExtractedDocument, PageText, TextExtractor};
pub use normalize::{collapse_line_breaks, join_pages, normalize_page, PAGE_SEPARATOR};

use std::io::Read;
use std::path::Path;

/// Extract normalized text from any readable PDF source using default options
pub fn extract<R: Read>(reader: R) -> Result<String> {
    TextExtractor::new().extract(reader)
}

/// Open the PDF at `path` and extract its normalized text using default options
///
/// The file handle is closed before this returns, on success and on failure.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    TextExtractor::new().extract_file(path)
}
