mod analysis_service;
pub mod baseline;
mod document_extractor;
mod feedback_normalizer;
mod prompt_builder;
pub mod sample_resumes;

pub use analysis_service::{AnalysisOutcome, AnalysisService, FeedbackSource};
pub use baseline::{baseline_feedback, baseline_score};
pub use document_extractor::DocumentExtractor;
pub use feedback_normalizer::{coerce_score, normalize, normalize_with_rng};
pub use prompt_builder::{MAX_PROMPT_RESUME_CHARS, TRUNCATION_MARKER, build_prompt, truncate_resume};
