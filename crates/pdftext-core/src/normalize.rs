//! Whitespace normalization for extracted page text
//!
//! Raw page text carries layout artifacts: every text object, positioning
//! operator or empty line can contribute a line break. Each page is reduced to
//! single line breaks and trimmed, then pages are joined with one blank line.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Separator placed between normalized pages (one blank line)
pub const PAGE_SEPARATOR: &str = "\n\n";

lazy_static! {
    /// Two or more consecutive line feeds; a lone one is already collapsed
    static ref LINE_BREAK_RUN: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Collapse every maximal run of `'\n'` into a single `'\n'`.
///
/// Idempotent. Borrows the input when there is nothing to collapse.
pub fn collapse_line_breaks(text: &str) -> Cow<'_, str> {
    LINE_BREAK_RUN.replace_all(text, "\n")
}

/// Normalize one page of raw text: collapse line-break runs, then trim
/// leading and trailing whitespace.
pub fn normalize_page(raw: &str) -> String {
    collapse_line_breaks(raw).trim().to_string()
}

/// Join already-normalized pages in order with [`PAGE_SEPARATOR`].
///
/// Empty pages keep their slot, so `["", "Hello"]` becomes `"\n\nHello"`.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}
