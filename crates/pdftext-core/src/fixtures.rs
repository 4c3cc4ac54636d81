//! Small text PDFs built with lopdf, for tests
//!
//! Every line of a page's text becomes its own text object drawn in Courier,
//! so a page built from `"a\n\n\nb"` extracts with line breaks between the
//! lines and nothing for the blank ones. An empty string produces a page with
//! an empty content stream.
//!
//! The `cid` variants draw with a Type0 font in Identity-H encoding, the way
//! most word processors and browsers export text. Each character is shown as
//! its two-byte code point, and a ToUnicode CMap maps the codes back.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::BTreeSet;

const LINE_HEIGHT: i64 = 14;
const TOP_MARGIN: i64 = 720;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FontKind {
    Courier,
    Cid { to_unicode: bool },
}

/// Build a PDF with one page per entry of `pages`
pub fn pdf_with_pages<S: AsRef<str>>(pages: &[S]) -> Vec<u8> {
    build(pages, FontKind::Courier)
}

/// Like [`pdf_with_pages`], drawn with an Identity-H font that carries a
/// ToUnicode CMap
pub fn pdf_with_cid_pages<S: AsRef<str>>(pages: &[S]) -> Vec<u8> {
    build(pages, FontKind::Cid { to_unicode: true })
}

/// Identity-H font with no ToUnicode CMap: the drawn codes have no text
pub fn pdf_with_unmapped_cid_pages<S: AsRef<str>>(pages: &[S]) -> Vec<u8> {
    build(pages, FontKind::Cid { to_unicode: false })
}

fn build<S: AsRef<str>>(pages: &[S], kind: FontKind) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = match kind {
        FontKind::Courier => doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Courier".to_vec())),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
        ])),
        FontKind::Cid { to_unicode } => {
            let chars: BTreeSet<char> = pages.iter().flat_map(|p| p.as_ref().chars()).collect();
            add_cid_font(&mut doc, &chars, to_unicode)
        }
    };
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "F1",
            Object::Reference(font_id),
        )])),
    )]));

    let mut page_ids = Vec::new();
    for text in pages {
        let content = Content {
            operations: page_operations(text.as_ref(), kind),
        };
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            content.encode().expect("fixture content encodes"),
        ));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(Object::Reference(doc.add_object(page)));
    }

    let page_count = page_ids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_ids)),
        ("Count", Object::Integer(page_count)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("fixture PDF serializes");
    buffer
}

fn add_cid_font(doc: &mut Document, chars: &BTreeSet<char>, to_unicode: bool) -> ObjectId {
    let descriptor_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"FontDescriptor".to_vec())),
        ("FontName", Object::Name(b"FixtureSans".to_vec())),
        ("Flags", Object::Integer(32)),
        (
            "FontBBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(-200),
                Object::Integer(600),
                Object::Integer(800),
            ]),
        ),
        ("ItalicAngle", Object::Integer(0)),
        ("Ascent", Object::Integer(800)),
        ("Descent", Object::Integer(-200)),
        ("CapHeight", Object::Integer(700)),
        ("StemV", Object::Integer(80)),
    ]));
    let descendant_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"CIDFontType2".to_vec())),
        ("BaseFont", Object::Name(b"FixtureSans".to_vec())),
        (
            "CIDSystemInfo",
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Registry", Object::string_literal("Adobe")),
                ("Ordering", Object::string_literal("Identity")),
                ("Supplement", Object::Integer(0)),
            ])),
        ),
        ("FontDescriptor", Object::Reference(descriptor_id)),
        ("DW", Object::Integer(600)),
    ]));

    let mut font = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type0".to_vec())),
        ("BaseFont", Object::Name(b"FixtureSans".to_vec())),
        ("Encoding", Object::Name(b"Identity-H".to_vec())),
        (
            "DescendantFonts",
            Object::Array(vec![Object::Reference(descendant_id)]),
        ),
    ]);
    if to_unicode {
        let cmap_id = doc.add_object(Stream::new(Dictionary::new(), to_unicode_cmap(chars)));
        font.set("ToUnicode", Object::Reference(cmap_id));
    }
    doc.add_object(font)
}

/// ToUnicode CMap mapping every code to the code point it was drawn from
fn to_unicode_cmap(chars: &BTreeSet<char>) -> Vec<u8> {
    let codes: Vec<u16> = chars.iter().filter_map(|&c| u16::try_from(u32::from(c)).ok()).collect();

    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );
    // bfchar blocks hold at most 100 entries
    for block in codes.chunks(100) {
        cmap.push_str(&format!("{} beginbfchar\n", block.len()));
        for code in block {
            cmap.push_str(&format!("<{:04X}> <{:04X}>\n", code, code));
        }
        cmap.push_str("endbfchar\n");
    }
    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );
    cmap.into_bytes()
}

fn encode_line(line: &str, kind: FontKind) -> Object {
    match kind {
        FontKind::Courier => Object::String(line.as_bytes().to_vec(), StringFormat::Literal),
        FontKind::Cid { .. } => {
            let bytes = line
                .chars()
                .filter_map(|c| u16::try_from(u32::from(c)).ok())
                .flat_map(u16::to_be_bytes)
                .collect();
            Object::String(bytes, StringFormat::Hexadecimal)
        }
    }
}

fn page_operations(text: &str, kind: FontKind) -> Vec<Operation> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut operations = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(12)]),
            Operation::new(
                "Td",
                vec![
                    Object::Integer(72),
                    Object::Integer(TOP_MARGIN - LINE_HEIGHT * i as i64),
                ],
            ),
            Operation::new("Tj", vec![encode_line(line, kind)]),
            Operation::new("ET", vec![]),
        ]);
    }
    operations
}
