use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ExtractedText, RawDocument};

use super::sample_resumes::{sample_resume_index, select_sample_resume};

/// Turns uploaded documents into clean text, substituting a sample résumé when
/// decoding fails.
pub struct DocumentExtractor {
    file_loader: Arc<dyn FileLoader>,
}

impl DocumentExtractor {
    pub fn new(file_loader: Arc<dyn FileLoader>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            filename = %document.filename,
            mime_type = %document.mime_type,
            size_bytes = document.size_bytes(),
        )
    )]
    pub fn extract(&self, document: RawDocument) -> ExtractedText {
        match self.decode(&document) {
            Ok(text) => {
                tracing::info!(chars = text.char_count(), "Document text extracted");
                text
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback_index = sample_resume_index(&document.filename),
                    "Document extraction failed, using sample resume"
                );
                Self::fallback_for(&document.filename)
            }
        }
    }

    /// The sample résumé assigned to `filename`.
    pub fn fallback_for(filename: &str) -> ExtractedText {
        let sample = select_sample_resume(filename);
        ExtractedText::from_raw(sample).expect("sample resumes contain printable text")
    }

    fn decode(&self, document: &RawDocument) -> Result<ExtractedText, FileLoaderError> {
        if document.data.is_empty() {
            return Err(FileLoaderError::ExtractionFailed(
                "empty upload buffer".to_string(),
            ));
        }

        let raw = panic::catch_unwind(AssertUnwindSafe(|| self.file_loader.extract_text(document)))
            .map_err(|_| FileLoaderError::ExtractionFailed("decoder panicked".to_string()))??;
        if raw.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        ExtractedText::from_raw(&raw)
            .ok_or_else(|| FileLoaderError::NoTextFound(document.filename.clone()))
    }
}
