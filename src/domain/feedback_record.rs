use serde::{Deserialize, Serialize};

/// Structured résumé feedback returned to clients.
///
/// Every list is non-empty and no longer than its `MAX_*` cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ats_optimization: Vec<String>,
    pub grammar_improvements: Vec<String>,
    pub score: u8,
    pub recommendations: Vec<String>,
}

impl FeedbackRecord {
    pub const MAX_STRENGTHS: usize = 4;
    pub const MAX_WEAKNESSES: usize = 3;
    pub const MAX_MISSING_SKILLS: usize = 3;
    pub const MAX_ATS_OPTIMIZATION: usize = 2;
    pub const MAX_GRAMMAR_IMPROVEMENTS: usize = 2;
    pub const MAX_RECOMMENDATIONS: usize = 3;
    pub const MAX_SCORE: u8 = 100;
}
