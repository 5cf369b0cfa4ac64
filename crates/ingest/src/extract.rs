//! Default text extraction for uploads.

use tracing::debug;

use crate::types::{DocumentFormat, UploadedFile};
use crate::{IngestError, TextExtractor};

/// Extractor used when the caller doesn't inject one.
///
/// PDF goes through `pdf-extract`, DOCX through `zip` + `quick-xml`, and
/// everything else is decoded as UTF-8 with invalid sequences replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtractor;

impl TextExtractor for DefaultExtractor {
    fn extract(&self, file: &UploadedFile) -> Result<String, IngestError> {
        if file.bytes.is_empty() {
            return Err(IngestError::EmptyUpload(file.name.clone()));
        }

        let format = file.format();
        debug!(name = %file.name, ?format, bytes = file.bytes.len(), "extracting upload");

        match format {
            DocumentFormat::Pdf => extract_pdf(file),
            DocumentFormat::Docx => extract_docx(file),
            DocumentFormat::PlainText => Ok(String::from_utf8_lossy(&file.bytes).into_owned()),
        }
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(file: &UploadedFile) -> Result<String, IngestError> {
    let bytes = file.bytes.as_slice();
    // pdf-extract can panic on malformed content streams.
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(IngestError::Pdf {
            name: file.name.clone(),
            reason: err.to_string(),
        }),
        Err(_) => Err(IngestError::Pdf {
            name: file.name.clone(),
            reason: "parser panicked".into(),
        }),
    }
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_file: &UploadedFile) -> Result<String, IngestError> {
    Err(IngestError::UnsupportedFormat("pdf".into()))
}

#[cfg(feature = "docx")]
fn extract_docx(file: &UploadedFile) -> Result<String, IngestError> {
    use std::io::{Cursor, Read};

    let docx_err = |reason: String| IngestError::Docx {
        name: file.name.clone(),
        reason,
    };

    let mut archive =
        zip::ZipArchive::new(Cursor::new(file.bytes.as_slice())).map_err(|e| docx_err(e.to_string()))?;
    let mut doc = archive
        .by_name("word/document.xml")
        .map_err(|e| docx_err(e.to_string()))?;
    let mut xml = String::new();
    doc.read_to_string(&mut xml)
        .map_err(|e| docx_err(e.to_string()))?;

    document_xml_text(&xml).map_err(docx_err)
}

#[cfg(not(feature = "docx"))]
fn extract_docx(_file: &UploadedFile) -> Result<String, IngestError> {
    Err(IngestError::UnsupportedFormat("docx".into()))
}

/// Collect the text runs (`w:t`) of a WordprocessingML body. Paragraph ends
/// and explicit breaks become newlines, tabs become spaces.
#[cfg(feature = "docx")]
fn document_xml_text(xml: &str) -> Result<String, String> {
    use quick_xml::events::Event;
    use quick_xml::Reader as XmlReader;

    let mut reader = XmlReader::from_str(xml);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                if ends_with_tag(start.name().as_ref(), b"t") {
                    in_run_text = true;
                }
            }
            Ok(Event::Text(text)) if in_run_text => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                out.push_str(&text);
            }
            Ok(Event::End(end)) => {
                let name = end.name();
                if ends_with_tag(name.as_ref(), b"t") {
                    in_run_text = false;
                } else if ends_with_tag(name.as_ref(), b"p") {
                    out.push('\n');
                }
            }
            Ok(Event::Empty(empty)) => {
                let name = empty.name();
                if ends_with_tag(name.as_ref(), b"br") || ends_with_tag(name.as_ref(), b"cr") {
                    out.push('\n');
                } else if ends_with_tag(name.as_ref(), b"tab") {
                    out.push(' ');
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.to_string()),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

/// `name` equals `tag` or is `prefix:tag`.
#[cfg(feature = "docx")]
fn ends_with_tag(name: &[u8], tag: &[u8]) -> bool {
    if name == tag {
        return true;
    }
    name.len() > tag.len() + 1
        && name.ends_with(tag)
        && name[name.len() - tag.len() - 1] == b':'
}
