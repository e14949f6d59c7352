use std::sync::Arc;

use crate::application::services::{AnalysisService, DocumentExtractor};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub document_extractor: Arc<DocumentExtractor>,
    pub analysis_service: Arc<AnalysisService>,
    pub settings: Settings,
}
