//! Role-keyed default feedback used whenever generated content is missing or invalid.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::{ExperienceLevel, FeedbackRecord};

pub const DEFAULT_ROLE: &str = "Software Developer";
pub const DEFAULT_ROLE_MODIFIER: i32 = 5;
pub const SCORE_PERTURBATION: RangeInclusive<i32> = -2..=3;
pub const MIN_BASELINE_SCORE: i32 = 65;
pub const MAX_BASELINE_SCORE: i32 = 95;
pub const SCORE_STEP: i32 = 5;

struct RoleProfile {
    role: &'static str,
    score_modifier: i32,
    missing_skills: [&'static str; 3],
    recommendations: [&'static str; 3],
}

static ROLE_PROFILES: [RoleProfile; 6] = [
    RoleProfile {
        role: "Software Developer",
        score_modifier: 5,
        missing_skills: [
            "Containerization (Docker/Kubernetes)",
            "CI/CD pipeline experience",
            "Cloud platform certification",
        ],
        recommendations: [
            "Add GitHub profile with projects",
            "Include specific metrics in achievements",
            "Mention testing frameworks used",
        ],
    },
    RoleProfile {
        role: "Data Scientist",
        score_modifier: 3,
        missing_skills: [
            "Big data technologies (Spark/Hadoop)",
            "Cloud ML services",
            "Advanced visualization tools",
        ],
        recommendations: [
            "Include link to Kaggle profile",
            "Add specific model accuracy metrics",
            "Mention data pipeline experience",
        ],
    },
    RoleProfile {
        role: "Product Manager",
        score_modifier: 2,
        missing_skills: [
            "Product analytics tools (Amplitude/Mixpanel)",
            "A/B testing framework",
            "Roadmap management software",
        ],
        recommendations: [
            "Quantify product impact with metrics",
            "Include user research methods",
            "Add product launch experience",
        ],
    },
    RoleProfile {
        role: "Frontend Developer",
        score_modifier: 4,
        missing_skills: [
            "Modern frameworks (Next.js/Nuxt.js)",
            "Performance optimization tools",
            "Accessibility standards",
        ],
        recommendations: [
            "Add links to live projects",
            "Include Lighthouse scores",
            "Mention cross-browser testing",
        ],
    },
    RoleProfile {
        role: "Backend Developer",
        score_modifier: 4,
        missing_skills: [
            "Microservices architecture",
            "API design patterns",
            "Database optimization",
        ],
        recommendations: [
            "Include API performance metrics",
            "Add system design experience",
            "Mention security practices",
        ],
    },
    RoleProfile {
        role: "Full Stack Developer",
        score_modifier: 6,
        missing_skills: ["DevOps experience", "Cloud deployment", "End-to-end testing"],
        recommendations: [
            "Show full project examples",
            "Include deployment statistics",
            "Mention team collaboration tools",
        ],
    },
];

const STRENGTHS: [&str; 4] = [
    "Clean and professional formatting",
    "Relevant work experience clearly presented",
    "Good technical skills section with appropriate technologies",
    "Clear career progression timeline",
];

const WEAKNESSES: [&str; 3] = [
    "Limited quantifiable achievements with metrics",
    "Could use more action-oriented language",
    "Missing some industry-specific keywords",
];

const ATS_OPTIMIZATION: [&str; 3] = [
    "Add more job-specific keywords throughout the resume",
    "Use standard section headings for better ATS parsing",
    "Include both full terms and acronyms for technologies",
];

const GRAMMAR_IMPROVEMENTS: [&str; 3] = [
    "Use consistent verb tenses throughout descriptions",
    "Replace passive voice with active voice where possible",
    "Ensure consistent formatting of dates and job titles",
];

fn find_profile(job_role: &str) -> Option<&'static RoleProfile> {
    ROLE_PROFILES.iter().find(|p| p.role == job_role)
}

fn profile_or_default(job_role: &str) -> &'static RoleProfile {
    find_profile(job_role)
        .or_else(|| find_profile(DEFAULT_ROLE))
        .unwrap_or(&ROLE_PROFILES[0])
}

fn capped(items: &[&str], cap: usize) -> Vec<String> {
    items.iter().take(cap).map(|s| s.to_string()).collect()
}

pub fn base_score(level: ExperienceLevel) -> i32 {
    match level {
        ExperienceLevel::Fresher => 75,
        ExperienceLevel::Mid => 78,
        ExperienceLevel::Senior => 82,
    }
}

/// Score adjustment for `job_role`; unlisted roles get [`DEFAULT_ROLE_MODIFIER`].
pub fn role_modifier(job_role: &str) -> i32 {
    find_profile(job_role)
        .map(|p| p.score_modifier)
        .unwrap_or(DEFAULT_ROLE_MODIFIER)
}

/// Clamps `raw` into the baseline band and rounds it to the nearest multiple of five.
pub fn round_to_step(raw: i32) -> u8 {
    let clamped = raw.clamp(MIN_BASELINE_SCORE, MAX_BASELINE_SCORE);
    let rounded = (clamped + SCORE_STEP / 2) / SCORE_STEP * SCORE_STEP;
    rounded as u8
}

/// Deterministic part of the baseline score for a given perturbation `roll`.
pub fn score_for_roll(job_role: &str, level: ExperienceLevel, roll: i32) -> u8 {
    round_to_step(base_score(level) + role_modifier(job_role) + roll)
}

pub fn baseline_score<R: Rng + ?Sized>(job_role: &str, level: ExperienceLevel, rng: &mut R) -> u8 {
    let roll = rng.gen_range(SCORE_PERTURBATION);
    score_for_roll(job_role, level, roll)
}

pub fn baseline_feedback<R: Rng + ?Sized>(
    job_role: &str,
    level: ExperienceLevel,
    rng: &mut R,
) -> FeedbackRecord {
    let profile = profile_or_default(job_role);

    FeedbackRecord {
        summary: format!(
            "This resume shows {} level experience relevant to {} positions. The structure is professional, but could be optimized with more specific achievements and better keyword targeting.",
            level.as_str().to_lowercase(),
            job_role
        ),
        strengths: capped(&STRENGTHS, FeedbackRecord::MAX_STRENGTHS),
        weaknesses: capped(&WEAKNESSES, FeedbackRecord::MAX_WEAKNESSES),
        missing_skills: capped(&profile.missing_skills, FeedbackRecord::MAX_MISSING_SKILLS),
        ats_optimization: capped(&ATS_OPTIMIZATION, FeedbackRecord::MAX_ATS_OPTIMIZATION),
        grammar_improvements: capped(
            &GRAMMAR_IMPROVEMENTS,
            FeedbackRecord::MAX_GRAMMAR_IMPROVEMENTS,
        ),
        score: baseline_score(job_role, level, rng),
        recommendations: capped(&profile.recommendations, FeedbackRecord::MAX_RECOMMENDATIONS),
    }
}
