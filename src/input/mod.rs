//! Input resolution at the transport boundary.
//!
//! The transport hands the engine exactly one thing: a plain string. This
//! module turns whatever arrived — an inline message or an uploaded
//! document — into that string once, at the boundary, or rejects it with a
//! typed error before the engine is ever invoked.

pub mod document;
pub mod error;

pub use error::{InputError, InputResult};

use document::{extract_docx, extract_txt};

/// Stem used when the input was an inline message rather than a file.
const TEXT_MESSAGE_STEM: &str = "compressed_text";

/// What the transport received, resolved once into a tagged union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    /// Inline message text.
    Text(String),
    /// An uploaded document: original file name plus raw bytes.
    Document { name: String, bytes: Vec<u8> },
}

/// The engine-ready result of resolving a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Extracted text, guaranteed non-empty.
    pub text: String,
    /// File-name stem for the outbound attachment.
    pub stem: String,
}

/// Resolve a payload into engine input.
///
/// Rejections (`UnsupportedDocument`, `EmptyText`, decode failures) are
/// returned before the engine runs; the transport reports them to the user
/// as plain messages.
pub fn resolve(payload: MessagePayload) -> InputResult<ResolvedInput> {
    match payload {
        MessagePayload::Text(text) => {
            if text.is_empty() {
                return Err(InputError::EmptyText);
            }
            Ok(ResolvedInput {
                text,
                stem: TEXT_MESSAGE_STEM.to_string(),
            })
        }
        MessagePayload::Document { name, bytes } => {
            let lower = name.to_lowercase();
            let text = if lower.ends_with(".txt") {
                extract_txt(bytes)?
            } else if lower.ends_with(".docx") {
                extract_docx(&bytes)?
            } else {
                return Err(InputError::UnsupportedDocument(name));
            };
            if text.is_empty() {
                return Err(InputError::EmptyText);
            }
            Ok(ResolvedInput {
                text,
                stem: file_stem(&name),
            })
        }
    }
}

/// File name minus its last `.`-suffix; the whole name when there is none.
fn file_stem(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.to_string(),
    }
}

/// Name for the outbound summary attachment.
pub fn output_filename(stem: &str) -> String {
    format!("{stem}_compressed.txt")
}
