//! Plagscan Ingest Layer
//!
//! This is where uploaded documents turn into plain text. The checker only
//! ever sees strings; everything format-specific lives here.
//!
//! ## What we do here
//!
//! - **Detect the format** - `.pdf` / `application/pdf` is PDF, `.docx` or the
//!   WordprocessingML MIME type is DOCX, everything else is text.
//! - **Extract text** - PDF text layers via `pdf-extract`, DOCX runs via
//!   `zip` + `quick-xml`, plain uploads decoded as lossy UTF-8.
//! - **Pick the input** - [`DocumentInput`] models "pasted text or uploaded
//!   file"; when both arrive the file wins.
//!
//! Extraction sits behind [`TextExtractor`] so callers can plug in OCR or
//! anything else without touching the matcher.
//!
//! ## Example
//!
//! ```
//! use ingest::{DefaultExtractor, DocumentInput, TextExtractor, UploadedFile};
//!
//! let upload = UploadedFile::new("notes.txt", Some("text/plain".into()), b"some notes".to_vec());
//! let text = DefaultExtractor.extract(&upload).unwrap();
//! assert_eq!(text, "some notes");
//!
//! let input = DocumentInput::prefer_file(Some("typed".into()), Some(upload)).unwrap();
//! assert_eq!(input.resolve(&DefaultExtractor).unwrap(), "some notes");
//! ```

mod error;
mod extract;
mod types;

pub use crate::error::IngestError;
pub use crate::extract::DefaultExtractor;
pub use crate::types::{DocumentFormat, DocumentInput, UploadedFile, DOCX_MIME, PDF_MIME};

/// Turns an uploaded file into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, file: &UploadedFile) -> Result<String, IngestError>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for std::sync::Arc<T> {
    fn extract(&self, file: &UploadedFile) -> Result<String, IngestError> {
        (**self).extract(file)
    }
}
