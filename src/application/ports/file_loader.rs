use crate::domain::RawDocument;

/// Decodes an uploaded document into raw text.
///
/// Implementations block while decoding; callers on an async runtime should run
/// them through `spawn_blocking`.
pub trait FileLoader: Send + Sync {
    fn extract_text(&self, document: &RawDocument) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
