use rand::Rng;
use serde_json::{Map, Value};

use crate::domain::{ExperienceLevel, FeedbackRecord};

use super::baseline::baseline_feedback;

/// Converts a free-form model reply into a fully populated [`FeedbackRecord`].
///
/// Fields that are missing or malformed are taken from the baseline for
/// `job_role` at [`ExperienceLevel::Mid`].
pub fn normalize(raw_reply: &str, job_role: &str) -> FeedbackRecord {
    normalize_with_rng(raw_reply, job_role, &mut rand::thread_rng())
}

pub fn normalize_with_rng<R: Rng + ?Sized>(
    raw_reply: &str,
    job_role: &str,
    rng: &mut R,
) -> FeedbackRecord {
    let baseline = baseline_feedback(job_role, ExperienceLevel::Mid, rng);

    let Some(candidate) = outermost_braces(raw_reply) else {
        tracing::warn!(
            reply_len = raw_reply.len(),
            "No JSON object found in reply, using baseline feedback"
        );
        return baseline;
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(fields)) => merge_with_baseline(&fields, baseline),
        Ok(_) => {
            tracing::warn!(
                reply_len = raw_reply.len(),
                "Reply JSON is not an object, using baseline feedback"
            );
            baseline
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                reply_len = raw_reply.len(),
                "Failed to parse reply JSON, using baseline feedback"
            );
            baseline
        }
    }
}

/// The slice from the first `{` to the last `}`, if the last follows the first.
fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn merge_with_baseline(fields: &Map<String, Value>, baseline: FeedbackRecord) -> FeedbackRecord {
    FeedbackRecord {
        summary: string_field(fields.get("summary")).unwrap_or(baseline.summary),
        strengths: list_field(fields.get("strengths"), FeedbackRecord::MAX_STRENGTHS)
            .unwrap_or(baseline.strengths),
        weaknesses: list_field(fields.get("weaknesses"), FeedbackRecord::MAX_WEAKNESSES)
            .unwrap_or(baseline.weaknesses),
        missing_skills: list_field(
            fields.get("missingSkills"),
            FeedbackRecord::MAX_MISSING_SKILLS,
        )
        .unwrap_or(baseline.missing_skills),
        ats_optimization: list_field(
            fields.get("atsOptimization"),
            FeedbackRecord::MAX_ATS_OPTIMIZATION,
        )
        .unwrap_or(baseline.ats_optimization),
        grammar_improvements: list_field(
            fields.get("grammarImprovements"),
            FeedbackRecord::MAX_GRAMMAR_IMPROVEMENTS,
        )
        .unwrap_or(baseline.grammar_improvements),
        score: score_field(fields.get("score")).unwrap_or(baseline.score),
        recommendations: list_field(
            fields.get("recommendations"),
            FeedbackRecord::MAX_RECOMMENDATIONS,
        )
        .unwrap_or(baseline.recommendations),
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn list_field(value: Option<&Value>, cap: usize) -> Option<Vec<String>> {
    let Some(Value::Array(items)) = value else {
        return None;
    };

    let entries: Vec<String> = items.iter().take(cap).filter_map(list_entry).collect();
    (!entries.is_empty()).then_some(entries)
}

fn list_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Rounds and clamps a JSON number into `0..=100`.
pub fn coerce_score(value: f64) -> u8 {
    value
        .round()
        .clamp(0.0, f64::from(FeedbackRecord::MAX_SCORE)) as u8
}

/// Numbers too large for `f64` keep their literal text and clamp by sign.
fn score_field(value: Option<&Value>) -> Option<u8> {
    match value {
        Some(Value::Number(n)) => Some(match n.as_f64() {
            Some(score) => coerce_score(score),
            None if n.to_string().starts_with('-') => 0,
            None => FeedbackRecord::MAX_SCORE,
        }),
        _ => None,
    }
}
