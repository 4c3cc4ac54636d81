//! Property-based tests for normalization and page joining

use pdftext_core::fixtures::pdf_with_pages;
use pdftext_core::{collapse_line_breaks, join_pages, normalize_page, TextExtractor, PAGE_SEPARATOR};
use proptest::prelude::*;

/// Raw page text with layout noise: words, spaces, tabs and line-break runs
fn raw_page() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Za-z0-9]{1,12}",
            Just(" ".to_string()),
            Just("\t".to_string()),
            "\n{1,5}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// A single line of text the fixture font can draw
fn line() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,10}( [A-Za-z0-9]{1,10}){0,3}"
}

/// Page text for a fixture PDF: lines separated by line-break runs
fn fixture_page() -> impl Strategy<Value = (Vec<String>, Vec<usize>)> {
    prop::collection::vec(line(), 1..5).prop_flat_map(|lines| {
        let gaps = prop::collection::vec(1usize..4, lines.len());
        (Just(lines), gaps)
    })
}

fn render_page(lines: &[String], gaps: &[usize]) -> String {
    let mut out = String::new();
    for (line, gap) in lines.iter().zip(gaps) {
        out.push_str(line);
        out.push_str(&"\n".repeat(*gap));
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn collapse_is_idempotent(raw in raw_page()) {
        let once = collapse_line_breaks(&raw).into_owned();
        let twice = collapse_line_breaks(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_is_idempotent(raw in raw_page()) {
        let once = normalize_page(&raw);
        prop_assert_eq!(normalize_page(&once), once.clone());
        prop_assert_eq!(collapse_line_breaks(&once).into_owned(), once);
    }

    #[test]
    fn normalized_page_has_no_blank_lines(raw in raw_page()) {
        let page = normalize_page(&raw);
        prop_assert!(!page.contains(PAGE_SEPARATOR));
        prop_assert_eq!(page.trim(), page.as_str());
    }

    #[test]
    fn normalize_keeps_every_word(raw in raw_page()) {
        let page = normalize_page(&raw);
        let before: Vec<&str> = raw.split_whitespace().collect();
        let after: Vec<&str> = page.split_whitespace().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn join_then_split_recovers_pages(raws in prop::collection::vec(raw_page(), 1..6)) {
        let pages: Vec<String> = raws
            .iter()
            .map(|r| normalize_page(r))
            .filter(|p| !p.is_empty())
            .collect();
        prop_assume!(!pages.is_empty());

        let joined = join_pages(&pages);
        prop_assert_eq!(joined.matches(PAGE_SEPARATOR).count(), pages.len() - 1);

        let split: Vec<&str> = joined.split(PAGE_SEPARATOR).collect();
        prop_assert_eq!(split, pages.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

proptest! {
    // Each case builds and parses a real PDF
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn extracted_pages_match_their_lines(pages in prop::collection::vec(fixture_page(), 1..4)) {
        let rendered: Vec<String> = pages
            .iter()
            .map(|(lines, gaps)| render_page(lines, gaps))
            .collect();
        let pdf = pdf_with_pages(&rendered);

        let text = TextExtractor::new().extract_bytes(&pdf).unwrap();

        let expected: Vec<String> = pages.iter().map(|(lines, _)| lines.join("\n")).collect();
        prop_assert_eq!(text.matches(PAGE_SEPARATOR).count(), pages.len() - 1);
        prop_assert_eq!(text, expected.join("\n\n"));
    }
}
