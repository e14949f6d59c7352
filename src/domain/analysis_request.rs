use super::ExperienceLevel;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_role: String,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("resume text and job role are required (resume text present: {has_resume_text}, job role present: {has_job_role})")]
pub struct AnalysisRequestError {
    pub has_resume_text: bool,
    pub has_job_role: bool,
}

impl AnalysisRequest {
    pub fn new(
        resume_text: impl Into<String>,
        job_role: impl Into<String>,
        experience_level: ExperienceLevel,
    ) -> Result<Self, AnalysisRequestError> {
        let resume_text = resume_text.into();
        let job_role = job_role.into().trim().to_string();

        let has_resume_text = !resume_text.trim().is_empty();
        let has_job_role = !job_role.is_empty();
        if !has_resume_text || !has_job_role {
            return Err(AnalysisRequestError {
                has_resume_text,
                has_job_role,
            });
        }

        Ok(Self {
            resume_text,
            job_role,
            experience_level,
        })
    }
}
