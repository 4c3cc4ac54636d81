//! Page text backends
//!
//! A backend turns PDF bytes into the ordered list of raw page strings. It
//! does no normalization; that happens once in [`crate::extract`] regardless
//! of which library produced the text.

use lopdf::{Dictionary, Document, Object};
use std::panic::{self, AssertUnwindSafe};
use tracing::{info, warn};

use crate::error::{ExtractionError, Result};

/// Trait for PDF page text backends
pub trait PageTextBackend: Send + Sync {
    /// Backend identifier
    fn name(&self) -> &'static str;

    /// Raw text of every page, in document order
    fn page_texts(&self, data: &[u8]) -> Result<Vec<String>>;
}

/// What lopdf emits in place of text drawn with an Identity-H font
const IDENTITY_PLACEHOLDER: &str = "?Identity-H Unimplemented?";

/// lopdf backend: decodes each page's content stream and collects the
/// strings drawn by text-showing operators
///
/// lopdf only understands simple fonts with a named encoding. Documents with
/// composite (Type0) fonts or custom encodings are handed to
/// [`LayoutBackend`], which reads ToUnicode maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl NativeBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PageTextBackend for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn page_texts(&self, data: &[u8]) -> Result<Vec<String>> {
        let doc = Document::load_mem(data)
            .map_err(|e| ExtractionError::InvalidDocument(e.to_string()))?;

        // get_pages is keyed by page number, so iteration is document order
        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());
        let mut undecodable = false;

        for (&page_number, &page_id) in pages.iter() {
            undecodable |= doc.get_page_fonts(page_id).values().any(|f| needs_cmap(f));
            let text = doc.extract_text(&[page_number]).map_err(|e| {
                ExtractionError::InvalidDocument(format!("page {}: {}", page_number, e))
            })?;
            undecodable |= text.contains(IDENTITY_PLACEHOLDER);
            texts.push(text);
        }

        if !undecodable {
            return Ok(texts);
        }

        info!("document uses fonts lopdf cannot decode, switching to layout backend");
        match LayoutBackend::new().page_texts(data) {
            Ok(layout) if layout.len() == texts.len() => Ok(layout),
            Ok(layout) => {
                warn!(
                    native_pages = texts.len(),
                    layout_pages = layout.len(),
                    "layout backend disagrees on page count, keeping native text"
                );
                Ok(strip_placeholder(texts))
            }
            Err(e) => {
                warn!(error = %e, "layout backend failed, keeping native text");
                Ok(strip_placeholder(texts))
            }
        }
    }
}

/// Whether a font's codes can only be mapped to text through a CMap or a
/// custom encoding, neither of which lopdf's text extraction reads
fn needs_cmap(font: &Dictionary) -> bool {
    let composite = font
        .get(b"Subtype")
        .and_then(Object::as_name)
        .map(|subtype| subtype == b"Type0")
        .unwrap_or(false);

    let custom_encoding = match font.get(b"Encoding") {
        Ok(Object::Name(name)) => name == b"Identity-H" || name == b"Identity-V",
        Ok(_) => true,
        Err(_) => false,
    };

    composite || custom_encoding
}

fn strip_placeholder(texts: Vec<String>) -> Vec<String> {
    texts
        .into_iter()
        .map(|t| t.replace(IDENTITY_PLACEHOLDER, ""))
        .collect()
}

/// pdf-extract backend: lays out glyphs with font metrics before emitting
/// text, so word spacing follows the rendered page more closely
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutBackend;

impl LayoutBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PageTextBackend for LayoutBackend {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn page_texts(&self, data: &[u8]) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed input instead of returning errors
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ExtractionError::InvalidDocument(e.to_string())),
            Err(_) => {
                warn!("pdf-extract panicked while decoding document");
                Err(ExtractionError::InvalidDocument(
                    "PDF decoder panicked (malformed document)".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fixtures;

    #[test]
    fn test_native_pages_in_order() {
        let pdf = fixtures::pdf_with_pages(&["First", "Second", "Third"]);
        let pages = NativeBackend::new().page_texts(&pdf).unwrap();

        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("First"));
        assert!(pages[1].contains("Second"));
        assert!(pages[2].contains("Third"));
    }

    #[test]
    fn test_native_empty_page_has_no_text() {
        let pdf = fixtures::pdf_with_pages(&["", "Hello"]);
        let pages = NativeBackend::new().page_texts(&pdf).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].trim().is_empty());
        assert!(pages[1].contains("Hello"));
    }

    #[test]
    fn test_native_rejects_non_pdf() {
        let err = NativeBackend::new()
            .page_texts(b"Just some notes, saved with the wrong extension.")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDocument);
    }

    #[test]
    fn test_native_rejects_empty_input() {
        let err = NativeBackend::new().page_texts(b"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDocument);
    }

    #[test]
    fn test_native_decodes_identity_h_through_tounicode() {
        let pdf = fixtures::pdf_with_cid_pages(&["Hello", "CID World"]);
        let pages = NativeBackend::new().page_texts(&pdf).unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Hello"), "page 1: {:?}", pages[0]);
        assert!(pages[1].contains("World"), "page 2: {:?}", pages[1]);
        assert!(pages.iter().all(|p| !p.contains(IDENTITY_PLACEHOLDER)));
    }

    #[test]
    fn test_needs_cmap_detection() {
        let simple = Dictionary::from_iter(vec![
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
        ]);
        let no_encoding = Dictionary::from_iter(vec![("Subtype", Object::Name(b"TrueType".to_vec()))]);
        let composite = Dictionary::from_iter(vec![
            ("Subtype", Object::Name(b"Type0".to_vec())),
            ("Encoding", Object::Name(b"Identity-H".to_vec())),
        ]);
        let differences = Dictionary::from_iter(vec![
            ("Subtype", Object::Name(b"Type1".to_vec())),
            (
                "Encoding",
                Object::Dictionary(Dictionary::from_iter(vec![(
                    "Differences",
                    Object::Array(vec![Object::Integer(65), Object::Name(b"Alpha".to_vec())]),
                )])),
            ),
        ]);

        assert!(!needs_cmap(&simple));
        assert!(!needs_cmap(&no_encoding));
        assert!(needs_cmap(&composite));
        assert!(needs_cmap(&differences));
    }

    #[test]
    fn test_strip_placeholder() {
        let texts = vec![format!("A{}B", IDENTITY_PLACEHOLDER), "plain".to_string()];
        assert_eq!(strip_placeholder(texts), vec!["AB", "plain"]);
    }

    #[test]
    fn test_layout_rejects_non_pdf() {
        let err = LayoutBackend::new()
            .page_texts(b"Not a PDF file")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDocument);
    }

    #[test]
    fn test_layout_extracts_text() {
        let pdf = fixtures::pdf_with_pages(&["Hello"]);
        let pages = LayoutBackend::new().page_texts(&pdf).unwrap();

        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Hello"));
    }
}
