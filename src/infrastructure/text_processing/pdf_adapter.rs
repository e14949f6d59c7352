use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, RawDocument};

#[derive(Default)]
pub struct PdfAdapter;

struct PageContent {
    page_number: usize,
    text: String,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<PageContent>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(PageContent {
                    page_number: page_index + 1,
                    text,
                }),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(page = page_index + 1, error = %e, "Skipping unreadable PDF page");
                }
            }
        }

        Ok(pages)
    }
}

impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, document), fields(filename = %document.filename))]
    fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Pdf) {
            return Err(FileLoaderError::UnsupportedContentType(
                document.mime_type.clone(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(&document.data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        // pdf_oxide can panic on damaged cross-reference data.
        let pages = panic::catch_unwind(AssertUnwindSafe(|| Self::extract_pages(temp_file.path())))
            .map_err(|_| FileLoaderError::ExtractionFailed("PDF decoder panicked".to_string()))??;

        tracing::info!(
            page_count = pages.len(),
            last_page = pages.last().map(|p| p.page_number),
            "PDF text extraction complete"
        );

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
