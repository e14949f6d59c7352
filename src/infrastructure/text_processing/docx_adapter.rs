//! Word-processor decoding.
//!
//! A `.docx` file is a ZIP archive whose body lives in `word/document.xml`.
//! Text comes from `w:t` runs; every `w:p` closes a paragraph.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX archive: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }

    pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    if e.local_name().as_ref() == b"t" {
                        in_text = true;
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => {
                        let paragraph = std::mem::take(&mut current);
                        if !paragraph.trim().is_empty() {
                            paragraphs.push(paragraph);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"tab" => current.push('\t'),
                    b"br" | b"cr" => current.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text => {
                    let text = t.unescape().map_err(|e| {
                        FileLoaderError::ExtractionFailed(format!("invalid XML text: {e}"))
                    })?;
                    current.push_str(&text);
                }
                Ok(Event::CData(t)) if in_text => {
                    current.push_str(&String::from_utf8_lossy(&t));
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(FileLoaderError::ExtractionFailed(format!(
                        "malformed {DOCUMENT_PART} at byte {}: {e}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if !current.trim().is_empty() {
            paragraphs.push(current);
        }

        Ok(paragraphs)
    }
}

impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, document), fields(filename = %document.filename))]
    fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        match document.content_type() {
            Some(ContentType::Docx) | Some(ContentType::Doc) => {}
            _ => {
                return Err(FileLoaderError::UnsupportedContentType(
                    document.mime_type.clone(),
                ));
            }
        }

        let xml = Self::read_document_part(&document.data)?;
        let paragraphs = Self::paragraphs_from_xml(&xml)?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        if paragraphs.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(paragraphs.join("\n\n"))
    }
}
