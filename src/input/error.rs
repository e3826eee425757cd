//! Input-boundary errors.
//!
//! Every variant is a user-visible rejection the transport reports as a
//! plain message. None of these ever originate inside the engine, which is
//! total over its string input.

use thiserror::Error;

pub type InputResult<T> = std::result::Result<T, InputError>;

#[derive(Debug, Error)]
pub enum InputError {
    /// The document extension is neither `.txt` nor `.docx`.
    #[error("unsupported document type: {0} (only TXT and DOCX are supported)")]
    UnsupportedDocument(String),

    /// A `.txt` document was not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The `.docx` container could not be opened or is missing its
    /// document part.
    #[error("could not read document archive: {0}")]
    MalformedArchive(#[from] zip::result::ZipError),

    /// Reading the archived document part failed.
    #[error("failed to read document contents: {0}")]
    Io(#[from] std::io::Error),

    /// No text was extracted, so there is nothing to summarize.
    #[error("no text could be extracted from the input")]
    EmptyText,
}
