use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;

pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF through `pdf_oxide`; DOCX and legacy Word labels through the DOCX decoder.
    pub fn with_document_adapters() -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let word: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        Self::new(vec![
            (ContentType::Pdf, pdf),
            (ContentType::Docx, Arc::clone(&word)),
            (ContentType::Doc, word),
        ])
    }
}

impl FileLoader for CompositeFileLoader {
    fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        let adapter = document
            .content_type()
            .and_then(|content_type| self.adapters.get(&content_type))
            .ok_or_else(|| FileLoaderError::UnsupportedContentType(document.mime_type.clone()))?;

        adapter.extract_text(document)
    }
}
