//! Text extraction from uploaded documents.
//!
//! Plain text is a UTF-8 decode. Word documents are OOXML zip containers:
//! the text lives in `word/document.xml` as `<w:t>` runs grouped into
//! `<w:p>` paragraphs. Paragraph texts are joined with newline separators,
//! matching how word-processor text reads as plain text. Styling, tables,
//! headers, and embedded objects are ignored.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use zip::ZipArchive;

use super::error::InputResult;

/// Path of the main document part inside a docx container.
const DOCUMENT_PART: &str = "word/document.xml";

/// A text run inside a paragraph: `<w:t>` with optional attributes.
static TEXT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap());

/// Decode a `.txt` upload as UTF-8.
pub fn extract_txt(bytes: Vec<u8>) -> InputResult<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Extract the paragraph text of a `.docx` upload.
///
/// Paragraphs are joined with `\n`; empty paragraphs are kept as empty
/// lines. A document with no paragraphs extracts to the empty string
/// (rejected upstream as `EmptyText`).
pub fn extract_docx(bytes: &[u8]) -> InputResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    // Each piece before a `</w:p>` holds one paragraph's runs; the final
    // piece is the document tail and carries no paragraph text.
    let mut pieces: Vec<&str> = xml.split("</w:p>").collect();
    pieces.pop();

    let paragraphs: Vec<String> = pieces
        .iter()
        .map(|piece| {
            TEXT_RUN_RE
                .captures_iter(piece)
                .map(|cap| unescape_xml(&cap[1]))
                .collect::<String>()
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Resolve the five predefined XML entities. `&amp;` is handled last so
/// double-escaped sequences stay escaped once, as an XML parser would
/// leave them.
fn unescape_xml(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
