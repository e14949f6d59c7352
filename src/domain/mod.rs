mod analysis_request;
mod document;
mod experience_level;
mod extracted_text;
mod feedback_record;
mod text_sanitizer;

pub use analysis_request::{AnalysisRequest, AnalysisRequestError};
pub use document::{ContentType, DOC_MIME, DOCX_MIME, PDF_MIME, RawDocument};
pub use experience_level::ExperienceLevel;
pub use extracted_text::ExtractedText;
pub use feedback_record::FeedbackRecord;
pub use text_sanitizer::sanitize_extracted_text;
