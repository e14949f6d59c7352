use crate::domain::AnalysisRequest;

pub const MAX_PROMPT_RESUME_CHARS: usize = 3000;
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// Résumé text as embedded in the prompt: at most [`MAX_PROMPT_RESUME_CHARS`]
/// characters, followed by [`TRUNCATION_MARKER`] when it was cut.
pub fn truncate_resume(resume_text: &str) -> String {
    match resume_text.char_indices().nth(MAX_PROMPT_RESUME_CHARS) {
        Some((cut, _)) => format!("{} {}", &resume_text[..cut], TRUNCATION_MARKER),
        None => resume_text.to_string(),
    }
}

pub fn build_prompt(request: &AnalysisRequest) -> String {
    let level = request.experience_level.as_str();
    let role = request.job_role.as_str();
    let resume = truncate_resume(&request.resume_text);

    format!(
        r#"You are an expert resume reviewer and career coach. Analyze the following resume for a {level} level {role} position.

Resume Content:
{resume}

Please provide a comprehensive analysis in the following JSON format:
{{
  "summary": "Brief overall assessment (2-3 sentences)",
  "strengths": ["Strength 1", "Strength 2", "Strength 3", "Strength 4"],
  "weaknesses": ["Weakness 1", "Weakness 2", "Weakness 3"],
  "missingSkills": ["Skill 1", "Skill 2", "Skill 3"],
  "atsOptimization": ["ATS tip 1", "ATS tip 2"],
  "grammarImprovements": ["Grammar tip 1", "Grammar tip 2"],
  "score": 85,
  "recommendations": ["Recommendation 1", "Recommendation 2", "Recommendation 3"]
}}

Focus on:
1. Relevance to {role} at {level} level
2. Clarity, formatting, and professional presentation
3. Keyword optimization for Applicant Tracking Systems
4. Quantification of achievements with metrics
5. Skills alignment with {role} requirements
6. Actionable improvement suggestions

Score should be 0-100 based on ATS compatibility, content quality, and relevance.

Return ONLY valid JSON, no additional text or explanations."#
    )
}
