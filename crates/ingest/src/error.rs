//! Error types produced by text extraction.
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`Pdf`](IngestError::Pdf) | PDF text layer could not be read |
//! | [`Docx`](IngestError::Docx) | DOCX archive or document XML is broken |
//! | [`UnsupportedFormat`](IngestError::UnsupportedFormat) | Format recognized but support compiled out |
//! | [`EmptyUpload`](IngestError::EmptyUpload) | Zero-byte upload |

use thiserror::Error;

/// Errors returned by [`TextExtractor`](crate::TextExtractor) implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("failed to extract text from PDF `{name}`: {reason}")]
    Pdf { name: String, reason: String },

    #[error("failed to extract text from DOCX `{name}`: {reason}")]
    Docx { name: String, reason: String },

    #[error("format `{0}` is not supported by this build")]
    UnsupportedFormat(String),

    #[error("uploaded file `{0}` is empty")]
    EmptyUpload(String),
}
