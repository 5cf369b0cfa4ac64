use serde::{Deserialize, Serialize};

use crate::{IngestError, TextExtractor};

/// MIME type browsers report for `.docx` uploads.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type for PDF uploads.
pub const PDF_MIME: &str = "application/pdf";

/// An uploaded file: raw bytes plus the name and MIME type the client declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Format an upload is decoded as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    /// Decide the format from the file extension (case-insensitive) or the
    /// declared MIME type. Anything unrecognized is plain text.
    pub fn format(&self) -> DocumentFormat {
        let name = self.name.to_ascii_lowercase();
        let mime = self.content_type.as_deref().unwrap_or_default();
        if name.ends_with(".pdf") || mime == PDF_MIME {
            DocumentFormat::Pdf
        } else if name.ends_with(".docx") || mime == DOCX_MIME {
            DocumentFormat::Docx
        } else {
            DocumentFormat::PlainText
        }
    }
}

/// Either pasted text or an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentInput {
    Text { text: String },
    File { file: UploadedFile },
}

impl DocumentInput {
    pub fn text(text: impl Into<String>) -> Self {
        DocumentInput::Text { text: text.into() }
    }

    pub fn file(file: UploadedFile) -> Self {
        DocumentInput::File { file }
    }

    /// Resolve to plain text, running `extractor` for file inputs.
    pub fn resolve(&self, extractor: &dyn TextExtractor) -> Result<String, IngestError> {
        match self {
            DocumentInput::Text { text } => Ok(text.clone()),
            DocumentInput::File { file } => extractor.extract(file),
        }
    }

    /// Pick the file when both are supplied, otherwise whichever exists.
    pub fn prefer_file(text: Option<String>, file: Option<UploadedFile>) -> Option<Self> {
        match (file, text) {
            (Some(file), _) => Some(DocumentInput::file(file)),
            (None, Some(text)) => Some(DocumentInput::text(text)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        let f = UploadedFile::new("Thesis.PDF", None, vec![1]);
        assert_eq!(f.format(), DocumentFormat::Pdf);
        let f = UploadedFile::new("essay.docx", None, vec![1]);
        assert_eq!(f.format(), DocumentFormat::Docx);
        let f = UploadedFile::new("notes.txt", None, vec![1]);
        assert_eq!(f.format(), DocumentFormat::PlainText);
    }

    #[test]
    fn format_from_mime() {
        let f = UploadedFile::new("upload", Some(PDF_MIME.into()), vec![1]);
        assert_eq!(f.format(), DocumentFormat::Pdf);
        let f = UploadedFile::new("upload", Some(DOCX_MIME.into()), vec![1]);
        assert_eq!(f.format(), DocumentFormat::Docx);
        let f = UploadedFile::new("upload", Some("text/plain".into()), vec![1]);
        assert_eq!(f.format(), DocumentFormat::PlainText);
    }

    #[test]
    fn prefer_file_over_text() {
        let file = UploadedFile::new("a.txt", None, b"from file".to_vec());
        let picked = DocumentInput::prefer_file(Some("from text".into()), Some(file.clone()));
        assert_eq!(picked, Some(DocumentInput::file(file)));

        let picked = DocumentInput::prefer_file(Some("from text".into()), None);
        assert_eq!(picked, Some(DocumentInput::text("from text")));

        assert_eq!(DocumentInput::prefer_file(None, None), None);
    }

    #[test]
    fn document_input_serde_tagging() {
        let input = DocumentInput::text("hello");
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["text"], "hello");
    }
}
